use crate::config::Config;

/// Ordered directories consulted to resolve external command names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::new(vec![crate::config::DEFAULT_SEARCH_DIR.to_string()])
    }
}

impl SearchPath {
    pub fn new(dirs: Vec<String>) -> Self {
        Self { dirs }
    }

    /// Replaces every entry; an empty list disables external lookup.
    pub fn replace(&mut self, dirs: Vec<String>) {
        self.dirs = dirs;
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Mutable state owned by the shell and threaded through every command.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub search_path: SearchPath,
}

impl ShellState {
    pub fn new(config: &Config) -> Self {
        Self {
            search_path: SearchPath::new(config.search_path.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bin() {
        assert_eq!(SearchPath::default().dirs(), ["/bin".to_string()]);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut path = SearchPath::default();
        path.replace(vec!["/usr/bin".to_string(), "/opt/bin".to_string()]);
        assert_eq!(path.dirs(), ["/usr/bin".to_string(), "/opt/bin".to_string()]);

        path.replace(Vec::new());
        assert!(path.is_empty());
    }

    #[test]
    fn test_state_from_config() {
        let mut config = Config::default();
        config.search_path = vec!["/a".to_string(), "/b".to_string()];
        let state = ShellState::new(&config);
        assert_eq!(state.search_path.dirs(), ["/a".to_string(), "/b".to_string()]);
    }
}
