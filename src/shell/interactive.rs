use rustyline::{error::ReadlineError, DefaultEditor};

use super::Shell;
use crate::{core::commands::Flow, error::ShellError, input::Line};

impl Shell {
    /// Prompt loop on a terminal, with line editing and history.
    pub(super) fn run_editor(&mut self) -> Result<(), ShellError> {
        let mut editor = DefaultEditor::new()?;
        if let Some(history) = &self.config.history_file {
            if let Err(e) = editor.load_history(history) {
                log::debug!("no history loaded from {}: {}", history.display(), e);
            }
        }

        let prompt = self.config.prompt.clone();
        let max_len = self.config.max_line_len;
        let result = loop {
            match editor.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = editor.add_history_entry(line.as_str()) {
                            log::debug!("couldn't add to history: {}", e);
                        }
                    }
                    if self.handle_line(Line::check(line, max_len)) == Flow::Exit {
                        break Ok(());
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break Ok(()),
                Err(e) => break Err(e.into()),
            }
        };

        if let Some(history) = &self.config.history_file {
            if let Err(e) = editor.save_history(history) {
                log::debug!("couldn't save history to {}: {}", history.display(), e);
            }
        }
        result
    }
}
