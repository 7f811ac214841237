//! Interactive password generator form.
//!
//! One command per line. Failures and copy results are shown as notices the
//! user has to acknowledge before the form is redrawn.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::{CopyError, GenerateError, Result};
use crate::options::CharClass;
use crate::session::Session;
use crate::ui::{self, ClipboardWriter, SystemClipboard};

const COPIED: &str = "Password copied to clipboard!";
const COPY_FAILED: &str = "Failed to copy password to clipboard.";
const NOTHING_TO_COPY: &str = "No password to copy.";
const BAD_LENGTH: &str = "Password length must be between 8 and 32 characters.";
const EMPTY_POOL: &str = "Please select at least one character type.";

const MENU: &str =
    "Commands: length <n>, upper, lower, numbers, symbols, ambiguous, generate, quit";
const MENU_WITH_COPY: &str =
    "Commands: length <n>, upper, lower, numbers, symbols, ambiguous, generate, copy, quit";

const TOGGLES: [(CharClass, &str); 4] = [
    (CharClass::Uppercase, "upper"),
    (CharClass::Lowercase, "lower"),
    (CharClass::Numbers, "numbers"),
    (CharClass::Symbols, "symbols"),
];

pub fn run(settings: &Settings) -> Result<()> {
    let mut session = Session::new(settings.defaults.clone());
    let mut clipboard = SystemClipboard::new(settings.clear_after());

    let stdin = std::io::stdin();
    run_form(
        &mut session,
        &mut stdin.lock(),
        &mut std::io::stdout(),
        &mut clipboard,
    )?;

    if clipboard.has_pending() {
        println!("Waiting for the clipboard to be cleared...");
        clipboard.wait_for_clear();
    }
    Ok(())
}

pub fn run_form<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<()> {
    loop {
        render(session, out)?;
        let Some(line) = ui::prompt_line(input, out, "> ")? else {
            break;
        };
        let (cmd, arg) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        match cmd {
            "" | "show" | "help" => {}
            "length" => session.options.set_length_input(arg),
            "upper" => session.options.toggle(CharClass::Uppercase),
            "lower" => session.options.toggle(CharClass::Lowercase),
            "numbers" => session.options.toggle(CharClass::Numbers),
            "symbols" => session.options.toggle(CharClass::Symbols),
            "ambiguous" => {
                let on = !session.options.exclude_ambiguous;
                session.options.set_exclude_ambiguous(on);
            }
            "generate" | "g" => {
                if let Err(e) = session.generate() {
                    let notice = match e {
                        GenerateError::InvalidLength(_) => BAD_LENGTH,
                        GenerateError::EmptyPool => EMPTY_POOL,
                    };
                    ui::acknowledge(input, out, notice)?;
                }
            }
            "copy" | "c" => {
                let notice = match session.copy(clipboard) {
                    Ok(()) => COPIED,
                    Err(CopyError::NothingToCopy) => NOTHING_TO_COPY,
                    Err(CopyError::Clipboard(_)) => COPY_FAILED,
                };
                ui::acknowledge(input, out, notice)?;
            }
            "quit" | "q" => break,
            other => writeln!(out, "Unknown command: {}", other)?,
        }
    }
    Ok(())
}

fn render<W: Write>(session: &Session, out: &mut W) -> std::io::Result<()> {
    let opts = &session.options;
    writeln!(out)?;
    writeln!(out, "Password Generator")?;
    writeln!(out, "Create a secure password with just a few clicks.")?;
    writeln!(out)?;
    writeln!(out, "  Password Length: {}", opts.length)?;
    writeln!(out, "  Include:")?;
    for (class, cmd) in TOGGLES {
        let mark = checkbox(opts.includes(class));
        writeln!(out, "    {} {:<20} ({})", mark, class.label(), cmd)?;
    }
    let mark = checkbox(opts.exclude_ambiguous);
    writeln!(out, "    {} {:<20} (ambiguous)", mark, "Exclude ambiguous")?;

    match session.current() {
        Some(pwd) => {
            writeln!(out, "  Generated Password: {}", pwd.as_str())?;
            writeln!(out, "{}", MENU_WITH_COPY)
        }
        None => writeln!(out, "{}", MENU),
    }
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}
