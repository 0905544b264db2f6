use std::ffi::CString;

use crate::core::SearchPath;

/// Returns the first `dir/name` in search order that is executable.
pub fn resolve(search_path: &SearchPath, name: &str) -> Option<String> {
    search_path
        .dirs()
        .iter()
        .map(|dir| format!("{}/{}", dir, name))
        .find(|candidate| {
            let found = is_executable(candidate);
            log::trace!("probe {} -> {}", candidate, found);
            found
        })
}

fn is_executable(path: &str) -> bool {
    match CString::new(path) {
        Ok(c_path) => unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 },
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{process_lock, write_script};
    use std::fs;

    #[test]
    fn test_finds_in_bin() {
        let path = SearchPath::default();
        assert_eq!(resolve(&path, "sh"), Some("/bin/sh".to_string()));
    }

    #[test]
    fn test_empty_path_finds_nothing() {
        let path = SearchPath::new(Vec::new());
        assert_eq!(resolve(&path, "sh"), None);
    }

    #[test]
    fn test_missing_command() {
        let path = SearchPath::default();
        assert_eq!(resolve(&path, "definitely-not-a-command-4711"), None);
    }

    #[test]
    fn test_earlier_directory_wins() {
        let _guard = process_lock();
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_script(first.path(), "tool", "echo first");
        write_script(second.path(), "tool", "echo second");

        let dirs = |a: &tempfile::TempDir, b: &tempfile::TempDir| {
            SearchPath::new(vec![
                a.path().to_string_lossy().into_owned(),
                b.path().to_string_lossy().into_owned(),
            ])
        };

        let expected = format!("{}/tool", first.path().display());
        assert_eq!(resolve(&dirs(&first, &second), "tool"), Some(expected));

        let expected = format!("{}/tool", second.path().display());
        assert_eq!(resolve(&dirs(&second, &first), "tool"), Some(expected));
    }

    #[test]
    fn test_non_executable_file_is_skipped() {
        let _guard = process_lock();
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(first.path().join("tool"), "plain data").unwrap();
        write_script(second.path(), "tool", "true");

        let path = SearchPath::new(vec![
            first.path().to_string_lossy().into_owned(),
            second.path().to_string_lossy().into_owned(),
        ]);
        let expected = format!("{}/tool", second.path().display());
        assert_eq!(resolve(&path, "tool"), Some(expected));
    }
}
