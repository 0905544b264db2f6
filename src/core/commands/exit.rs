use super::{Command, CommandError, Flow};
use crate::core::ShellState;

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<Flow, CommandError> {
        if args.len() != 1 {
            return Err(CommandError::InvalidArguments(
                "exit takes no arguments".to_string(),
            ));
        }
        Ok(Flow::Exit)
    }
}
