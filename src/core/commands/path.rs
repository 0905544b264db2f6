use super::{Command, CommandError, Flow};
use crate::core::ShellState;

/// `path [dir ...]`: replaces the search path with the given directories.
#[derive(Clone, Default)]
pub struct PathCommand;

impl PathCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PathCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        let dirs = args.iter().skip(1).cloned().collect();
        state.search_path.replace(dirs);
        log::debug!("search path is now {:?}", state.search_path.dirs());
        Ok(Flow::Continue)
    }
}
