//! Command-line interface definitions for passforge.
//!
//! This module defines the public CLI surface using `clap`. It contains no
//! application logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "passforge",
    version,
    about = "A small local password generator",
    long_about = r#"
passforge generates random passwords from a pool of selected character
classes (uppercase, lowercase, digits, symbols) and can copy the result to
the system clipboard.

Typical usage:
  passforge gen
  passforge gen --length 24 --no-symbols --copy
  passforge form

Lengths must lie between 8 and 32 characters. At least one character class
must be selected.
"#,
)]
pub struct Cli {
    /// Path to a JSON settings file (falls back to $PASSFORGE_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a single password
    ///
    /// By default, generates a 16-character password using uppercase,
    /// lowercase, digits, and symbols.
    Gen(GenArgs),

    /// Open the interactive password generator form
    ///
    /// Edit the length and character classes, generate as many times as
    /// you like, and copy the current password to the clipboard.
    Form,
}

#[derive(Args, Clone, Debug, Default)]
pub struct GenArgs {
    /// Length of the generated password (8 to 32)
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Exclude uppercase characters (A–Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase characters (a–z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude digits (0–9)
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols (e.g. !@#$%)
    #[arg(long)]
    pub no_symbols: bool,

    /// Exclude ambiguous characters like 'I', 'l', '1', 'O', '0'
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Copy the generated password to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Clear the clipboard after this many seconds (implies waiting)
    #[arg(long, value_name = "SECS")]
    pub clear_after: Option<u64>,
}
