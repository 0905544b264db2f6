pub mod commands;
pub mod state;

pub use state::{SearchPath, ShellState};
