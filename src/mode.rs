use std::path::PathBuf;

use crate::error::ShellError;

/// How the shell obtains its command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch(PathBuf),
}

impl Mode {
    /// Selects the mode from the arguments following the program name.
    pub fn from_args(args: &[String]) -> Result<Self, ShellError> {
        match args {
            [] => Ok(Mode::Interactive),
            [script] => Ok(Mode::Batch(PathBuf::from(script))),
            _ => Err(ShellError::Usage(args.len())),
        }
    }
}
