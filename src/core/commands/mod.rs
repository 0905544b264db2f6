use std::collections::BTreeMap;

mod cd;
mod exit;
mod path;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use path::PathCommand;

use crate::core::ShellState;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ChangeDirectory(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ChangeDirectory(err) => write!(f, "cd failed: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the read loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A built-in. `args` is the full token sequence, command name included.
pub trait Command {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Path(PathCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
            CommandType::Path(cmd) => cmd.execute(args, state),
        }
    }
}

/// Routes one line's tokens to a built-in or to an external job.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("path", CommandType::Path(PathCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn execute(&self, tokens: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        let Some(name) = tokens.first() else {
            return Ok(Flow::Continue);
        };

        if let Some(cmd) = self.commands.get(name.as_str()) {
            log::debug!("builtin: {:?}", tokens);
            return cmd.execute(tokens, state);
        }

        log::debug!("external job: {:?}", tokens);
        self.process_executor.spawn_job(tokens, &state.search_path)?;
        Ok(Flow::Continue)
    }

    #[cfg(test)]
    pub(crate) fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}
