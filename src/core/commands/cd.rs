use super::{Command, CommandError, Flow};
use crate::core::ShellState;
use std::env;

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<Flow, CommandError> {
        let [_, target] = args else {
            return Err(CommandError::InvalidArguments(format!(
                "cd takes exactly one directory, got {}",
                args.len().saturating_sub(1)
            )));
        };

        env::set_current_dir(target).map_err(CommandError::ChangeDirectory)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tokenize;
    use crate::testing::process_lock;

    #[test]
    fn test_cd_changes_directory() {
        let _guard = process_lock();
        let original = env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().canonicalize().unwrap();

        let cmd = CdCommand::new();
        let result = cmd.execute(
            &["cd".to_string(), target.to_string_lossy().into_owned()],
            &mut ShellState::default(),
        );

        assert!(matches!(result, Ok(Flow::Continue)));
        assert_eq!(env::current_dir().unwrap(), target);
        env::set_current_dir(original).unwrap();
    }

    #[test]
    fn test_cd_invalid_keeps_directory() {
        let _guard = process_lock();
        let before = env::current_dir().unwrap();

        let cmd = CdCommand::new();
        let result = cmd.execute(&tokenize("cd /nonexistent/path"), &mut ShellState::default());

        assert!(matches!(result, Err(CommandError::ChangeDirectory(_))));
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_cd_arity() {
        let _guard = process_lock();
        let before = env::current_dir().unwrap();
        let cmd = CdCommand::new();

        for line in ["cd", "cd /tmp /"] {
            let result = cmd.execute(&tokenize(line), &mut ShellState::default());
            assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
        }
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
