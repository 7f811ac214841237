//! passforge: a small local password generator.
//!
//! This file is the application entry point. It is kept small and is
//! responsible only for:
//!
//! - Initializing logging
//! - Parsing CLI arguments
//! - Dispatching subcommands
//! - Exiting with appropriate status codes
//!
//! Command implementations live in `commands/` and user interaction
//! helpers live in `ui.rs`.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod generator;
mod options;
mod session;
mod ui;

fn main() -> ExitCode {
    init_logger();

    let cli = cli::Cli::parse();
    match commands::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}
