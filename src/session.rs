//! In-memory state of one generator session.
//!
//! Holds the current options and the last successfully generated password.
//! Nothing here outlives the process.

use crate::error::{CopyError, GenerateError};
use crate::generator::{self, GeneratedPassword};
use crate::options::GenerationOptions;
use crate::ui::ClipboardWriter;

#[derive(Debug, Default)]
pub struct Session {
    pub options: GenerationOptions,
    current: Option<GeneratedPassword>,
}

impl Session {
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }

    /// Generate from a snapshot of the options and make the result current.
    ///
    /// On failure the previous password, if any, stays current.
    pub fn generate(&mut self) -> Result<&GeneratedPassword, GenerateError> {
        let pwd = generator::generate(&self.options)?;
        Ok(&*self.current.insert(pwd))
    }

    /// Copy the current password to `clipboard`.
    ///
    /// Fails with [`CopyError::NothingToCopy`] without touching the clipboard
    /// when nothing has been generated yet.
    pub fn copy(&self, clipboard: &mut dyn ClipboardWriter) -> Result<(), CopyError> {
        let pwd = self.current.as_ref().ok_or(CopyError::NothingToCopy)?;

        if let Err(reason) = clipboard.write_text(pwd.as_str()) {
            log::warn!("error copying password: {}", reason);
            return Err(CopyError::Clipboard(reason));
        }

        log::info!("copied {}-character password to clipboard", pwd.len());
        Ok(())
    }
}
