use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};

mod interactive;

use crate::{
    config::Config,
    core::{
        commands::{CommandExecutor, Flow},
        ShellState,
    },
    error::{report_error, ShellError},
    input::{tokenize, Line, LineReader},
    mode::Mode,
};

pub struct Shell {
    pub(crate) config: Config,
    pub(crate) executor: CommandExecutor,
    pub(crate) state: ShellState,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        let state = ShellState::new(&config);
        Shell {
            config,
            executor: CommandExecutor::new(),
            state,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn run(&mut self, mode: &Mode) -> Result<(), ShellError> {
        match mode {
            Mode::Interactive if io::stdin().is_terminal() => self.run_editor(),
            Mode::Interactive => {
                let prompt = self.config.prompt.clone();
                self.run_lines(io::stdin().lock(), Some(prompt.as_str()))
            }
            Mode::Batch(path) => {
                let file =
                    File::open(path).map_err(|e| ShellError::ScriptOpen(path.clone(), e))?;
                log::debug!("running script {}", path.display());
                self.run_lines(BufReader::new(file), None)
            }
        }
    }

    /// Processes lines until end of input or a successful `exit`.
    pub fn run_lines<R: BufRead>(
        &mut self,
        reader: R,
        prompt: Option<&str>,
    ) -> Result<(), ShellError> {
        let mut lines = LineReader::new(reader, self.config.max_line_len);
        loop {
            if let Some(prompt) = prompt {
                let mut stdout = io::stdout().lock();
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
            }

            let Some(line) = lines.next_line()? else {
                return Ok(());
            };
            if self.handle_line(line) == Flow::Exit {
                return Ok(());
            }
        }
    }

    pub fn handle_line(&mut self, line: Line) -> Flow {
        match line {
            Line::TooLong(len) => {
                log::debug!("rejected line of {} bytes", len);
                report_error();
                Flow::Continue
            }
            Line::Text(text) => self.execute_line(&text),
        }
    }

    /// Runs one line; every failure is reported and the shell carries on.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        let tokens = tokenize(line);
        match self.executor.execute(&tokens, &mut self.state) {
            Ok(flow) => flow,
            Err(e) => {
                log::debug!("{}", e);
                report_error();
                Flow::Continue
            }
        }
    }
}
