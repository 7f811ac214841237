//! User interaction helpers for passforge.
//!
//! This module centralizes terminal I/O, acknowledgements, and clipboard
//! access. No generation logic should live here.

use std::io::{self, BufRead, Write};
use std::thread::JoinHandle;
use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};

/// Something that can receive text destined for the clipboard.
pub trait ClipboardWriter {
    /// Hand `value` to the clipboard. On failure, return a human-readable reason.
    fn write_text(&mut self, value: &str) -> Result<(), String>;
}

/// The platform clipboard.
///
/// When `clear_after` is set, every successful write also schedules a clear
/// that only fires if the clipboard still holds the written text.
pub struct SystemClipboard {
    clear_after: Option<Duration>,
    pending: Vec<JoinHandle<()>>,
}

impl SystemClipboard {
    pub fn new(clear_after: Option<Duration>) -> Self {
        Self {
            clear_after,
            pending: Vec::new(),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop handles of clear threads that have already run.
    fn prune_finished(&mut self) {
        self.pending.retain(|handle| !handle.is_finished());
    }

    /// Block until all scheduled clears have run.
    pub fn wait_for_clear(&mut self) {
        for handle in self.pending.drain(..) {
            if handle.join().is_err() {
                log::warn!("clipboard clear thread panicked");
            }
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, value: &str) -> Result<(), String> {
        match self.clear_after {
            Some(after) => {
                let handle = copy_to_clipboard_with_timeout(value, after)?;
                self.prune_finished();
                self.pending.push(handle);
                Ok(())
            }
            None => copy_to_clipboard(value),
        }
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut ctx: ClipboardContext = ClipboardProvider::new()
        .map_err(|e| format!("Clipboard init error: {}", e))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| format!("Clipboard set error: {}", e))
}

/// Copy `text`, then clear the clipboard after `after` unless it changed meanwhile.
pub fn copy_to_clipboard_with_timeout(
    text: &str,
    after: Duration,
) -> Result<JoinHandle<()>, String> {
    copy_to_clipboard(text)?;

    let text = zeroize::Zeroizing::new(text.to_string());
    let handle = std::thread::spawn(move || {
        std::thread::sleep(after);

        let ctx2_result: Result<ClipboardContext, _> = ClipboardProvider::new();
        if let Ok(mut ctx2) = ctx2_result {
            let current_result: Result<String, _> = ctx2.get_contents();
            if current_result.ok().as_deref() == Some(text.as_str()) {
                match ctx2.set_contents(String::new()) {
                    Ok(()) => log::info!("clipboard cleared after {:?}", after),
                    Err(e) => log::warn!("failed to clear clipboard: {}", e),
                }
            }
        }
    });

    Ok(handle)
}

/// Show `message` and wait for the user to press Enter.
///
/// EOF counts as an acknowledgement.
pub fn acknowledge<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<()> {
    writeln!(out, "{}", message)?;
    write!(out, "Press Enter to continue")?;
    out.flush()?;
    let mut s = String::new();
    input.read_line(&mut s)?;
    writeln!(out)?;
    Ok(())
}

/// Print `prompt` and read one trimmed line. `None` on EOF.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn acknowledge_consumes_one_line() {
        let mut input = Cursor::new("\nnext\n");
        let mut out = Vec::new();
        acknowledge(&mut input, &mut out, "No password to copy.").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("No password to copy.\n"));
        assert!(text.contains("Press Enter"));

        let rest = prompt_line(&mut input, &mut Vec::new(), "> ").unwrap();
        assert_eq!(rest.as_deref(), Some("next"));
    }

    #[test]
    fn prompt_line_reports_eof() {
        let mut input = Cursor::new("");
        let line = prompt_line(&mut input, &mut Vec::new(), "> ").unwrap();
        assert_eq!(line, None);
    }

    #[test]
    fn prompt_line_trims() {
        let mut input = Cursor::new("  length 12  \n");
        let line = prompt_line(&mut input, &mut Vec::new(), "> ").unwrap();
        assert_eq!(line.as_deref(), Some("length 12"));
    }

    #[test]
    fn finished_clear_threads_are_pruned() {
        let (release, wait) = std::sync::mpsc::channel::<()>();
        let mut clipboard = SystemClipboard::new(Some(Duration::from_secs(1)));

        let done = std::thread::spawn(|| {});
        while !done.is_finished() {
            std::thread::yield_now();
        }
        clipboard.pending.push(done);
        clipboard.pending.push(std::thread::spawn(move || {
            let _ = wait.recv();
        }));

        clipboard.prune_finished();
        assert_eq!(clipboard.pending.len(), 1);
        assert!(clipboard.has_pending());

        release.send(()).unwrap();
        clipboard.wait_for_clear();
        assert!(!clipboard.has_pending());
    }
}
