//! Generate a single password.

use std::io::Write;
use std::time::Duration;

use crate::cli::GenArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::options::{CharClass, GenerationOptions};
use crate::session::Session;
use crate::ui::{ClipboardWriter, SystemClipboard};

/// Overlay the command-line flags on the configured defaults.
pub fn options_from(args: &GenArgs, defaults: &GenerationOptions) -> GenerationOptions {
    let mut opts = defaults.clone();
    if let Some(length) = args.length {
        opts.set_length(length);
    }
    let excluded = [
        (CharClass::Uppercase, args.no_uppercase),
        (CharClass::Lowercase, args.no_lowercase),
        (CharClass::Numbers, args.no_digits),
        (CharClass::Symbols, args.no_symbols),
    ];
    for (class, off) in excluded {
        if off {
            opts.set_class(class, false);
        }
    }
    if args.exclude_ambiguous {
        opts.set_exclude_ambiguous(true);
    }
    opts
}

pub fn run(args: GenArgs, settings: &Settings) -> Result<()> {
    let clear_after = args
        .clear_after
        .map(Duration::from_secs)
        .or_else(|| settings.clear_after());
    let mut clipboard = SystemClipboard::new(clear_after);

    execute(&args, settings, &mut clipboard, &mut std::io::stdout())?;

    if let (true, Some(after)) = (args.copy, clear_after) {
        eprintln!("Clipboard will be cleared in {} seconds.", after.as_secs());
        clipboard.wait_for_clear();
    }
    Ok(())
}

fn execute<W: Write>(
    args: &GenArgs,
    settings: &Settings,
    clipboard: &mut dyn ClipboardWriter,
    out: &mut W,
) -> Result<()> {
    let mut session = Session::new(options_from(args, &settings.defaults));
    let pwd = session.generate()?;
    writeln!(out, "{}", pwd.as_str())?;

    if args.copy {
        session.copy(clipboard)?;
        eprintln!("Password copied to clipboard!");
    }
    Ok(())
}
