use std::process::ExitCode;

use peruse_cli::app;
use peruse_cli::commands::CommandLine;
use peruse_cli::terminal::{format, logging};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let result = logging::init_logging(&commands.log_file).and_then(|()| app::run(&commands));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format::error_line(&e));
            ExitCode::FAILURE
        }
    }
}
