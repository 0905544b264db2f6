use std::env;
use std::path::PathBuf;

/// Overrides the history file location; an empty value disables history.
pub const HISTFILE_VAR: &str = "HFSH_HISTFILE";

pub const DEFAULT_PROMPT: &str = "hfsh> ";
pub const DEFAULT_SEARCH_DIR: &str = "/bin";
/// Legacy line buffer was 256 bytes including its terminator.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

const HISTORY_FILE_NAME: &str = ".hfsh_history";

#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    pub search_path: Vec<String>,
    pub max_line_len: usize,
    pub history_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            search_path: vec![DEFAULT_SEARCH_DIR.to_string()],
            max_line_len: DEFAULT_MAX_LINE_LEN,
            history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME)),
        }
    }
}

impl Config {
    /// Defaults, with the history location taken from the environment when set.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(value) = env::var_os(HISTFILE_VAR) {
            config.history_file = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        log::debug!("loaded config: {:?}", config);
        config
    }

    #[cfg(test)]
    pub(crate) fn without_history(mut self) -> Self {
        self.history_file = None;
        self
    }
}
