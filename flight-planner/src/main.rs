mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use flight_planner::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    match commands::run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
