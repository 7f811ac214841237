//! Command dispatch layer for passforge.
//!
//! This module maps parsed CLI commands to their concrete implementations.
//! Each command lives in its own file and exposes a single `run()` function.

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;

pub mod form;
pub mod gen_pw;

pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Gen(args) => gen_pw::run(args, &settings),
        Commands::Form => form::run(&settings),
    }
}
