mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);

        let mut source = e.source();
        while let Some(s) = source {
            eprintln!("Caused by: {}", s);
            source = s.source();
        }

        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("cdft CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Global(args) => {
            info!("Dispatching to 'global' command.");
            commands::global::run(args)
        }
        Commands::Local(args) => {
            info!("Dispatching to 'local' command.");
            commands::local::run(args)
        }
    };

    match &command_result {
        Ok(()) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}
