use std::io::Write;
use std::path::PathBuf;

/// The only diagnostic text the shell ever prints.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

/// Writes [`ERROR_MESSAGE`] to standard error.
pub fn report_error() {
    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_all(ERROR_MESSAGE.as_bytes());
    let _ = stderr.flush();
}

#[derive(Debug)]
pub enum ShellError {
    Usage(usize),
    ScriptOpen(PathBuf, std::io::Error),
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Usage(count) => {
                write!(f, "expected at most one script argument, got {}", count)
            }
            ShellError::ScriptOpen(path, e) => {
                write!(f, "cannot open script {}: {}", path.display(), e)
            }
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}
