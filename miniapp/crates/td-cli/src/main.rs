//! td - dating mini-app command-line client
//!
//! Drives the same session ladder and account mutations as the mini-app,
//! printing JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Sign in with a host payload and show the session
//! td session --init-data "$TG_INIT_DATA" --pretty
//!
//! # Check a profile draft without sending it
//! td validate profile --file profile.json
//!
//! # Upload photos
//! td photo upload a.jpg b.png
//! ```

use td_cli::{Cli, load_config, logger, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let output = match run(&cli, &config).await {
        Ok(output) => output,
        Err(e) => {
            log::error!("Command failed: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match output.render(cli.pretty()) {
        Ok(json) => {
            println!("{json}");
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error serializing response: {e}");
            ExitCode::FAILURE
        }
    }
}
