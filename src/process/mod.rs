use std::fmt;

pub mod executor;
pub mod redirect;
pub mod resolver;

pub use executor::ProcessExecutor;
pub use redirect::{Redirect, RedirectError};
pub use resolver::resolve;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Redirect(RedirectError),
    InvalidArgument(String),
    Fork(std::io::Error),
    Wait(std::io::Error),
}

impl From<RedirectError> for ProcessError {
    fn from(e: RedirectError) -> Self {
        ProcessError::Redirect(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::Redirect(e) => write!(f, "Redirection error: {}", e),
            ProcessError::InvalidArgument(arg) => {
                write!(f, "Argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::Fork(e) => write!(f, "Fork failed: {}", e),
            ProcessError::Wait(e) => write!(f, "Wait failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
