use std::env;
use std::process::ExitCode;

use hfsh::config::Config;
use hfsh::error::report_error;
use hfsh::mode::Mode;
use hfsh::shell::Shell;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = Mode::from_args(&args).and_then(|mode| {
        let mut shell = Shell::new(Config::load());
        shell.run(&mode)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{}", e);
            report_error();
            ExitCode::FAILURE
        }
    }
}
