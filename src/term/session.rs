//! Raw mode session
//!
//! Captures the terminal attributes once, switches the device into raw input
//! mode and guarantees the snapshot is written back, either explicitly via
//! [`TerminalSession::leave_raw`] or when the session is dropped.

use std::io::{self, Stdin};
use std::os::fd::AsFd;

use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

use super::{TermError, TermResult};

/// Snapshot of the terminal attributes taken before raw mode was entered
#[derive(Debug, Clone)]
pub struct SavedMode {
    termios: Termios,
}

impl SavedMode {
    pub fn termios(&self) -> &Termios {
        &self.termios
    }

    /// Whether another attribute set is bit-for-bit identical to this snapshot
    pub fn matches(&self, other: &Termios) -> bool {
        let a = &self.termios;
        a.input_flags == other.input_flags
            && a.output_flags == other.output_flags
            && a.control_flags == other.control_flags
            && a.local_flags == other.local_flags
            && a.control_chars == other.control_chars
    }
}

/// Owner of a terminal device's input mode
///
/// Generic over the file descriptor so tests can drive a pseudo-terminal;
/// the application uses stdin.
pub struct TerminalSession<F: AsFd = Stdin> {
    fd: F,
    saved: Option<SavedMode>,
}

impl TerminalSession<Stdin> {
    /// Session bound to the process's standard input
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<F: AsFd> TerminalSession<F> {
    pub fn new(fd: F) -> Self {
        Self { fd, saved: None }
    }

    /// Whether raw mode is currently engaged
    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    pub fn saved_mode(&self) -> Option<&SavedMode> {
        self.saved.as_ref()
    }

    /// Current attributes of the underlying device
    pub fn attributes(&self) -> TermResult<Termios> {
        termios::tcgetattr(self.fd.as_fd()).map_err(TermError::Query)
    }

    /// Switch the device into raw input mode
    ///
    /// Disables canonical input and echo and makes reads return as soon as a
    /// single byte is available, with no timeout. On failure the device is
    /// left as it was. Entering twice returns the original snapshot.
    pub fn enter_raw(&mut self) -> TermResult<SavedMode> {
        if let Some(saved) = &self.saved {
            return Ok(saved.clone());
        }

        let original = self.attributes()?;

        let mut raw = original.clone();
        raw.local_flags.remove(LocalFlags::ICANON);
        raw.local_flags.remove(LocalFlags::ECHO);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

        termios::tcsetattr(self.fd.as_fd(), SetArg::TCSANOW, &raw).map_err(TermError::Apply)?;

        let saved = SavedMode { termios: original };
        self.saved = Some(saved.clone());
        tracing::debug!("Entered raw mode");
        Ok(saved)
    }

    /// Return the device to cooked mode
    ///
    /// Writes back the snapshot taken by [`enter_raw`](Self::enter_raw). With
    /// no snapshot (never entered, or already left) it re-enables canonical
    /// input and echo on the current attributes, so calling it repeatedly is
    /// harmless.
    pub fn leave_raw(&mut self) -> TermResult<()> {
        match self.saved.take() {
            Some(saved) => {
                if let Err(e) =
                    termios::tcsetattr(self.fd.as_fd(), SetArg::TCSADRAIN, &saved.termios)
                {
                    // Keep the snapshot so a later attempt (or drop) can retry
                    self.saved = Some(saved);
                    return Err(TermError::Restore(e));
                }
                tracing::debug!("Restored saved terminal mode");
            },
            None => {
                let mut cooked = termios::tcgetattr(self.fd.as_fd()).map_err(TermError::Restore)?;
                cooked.local_flags.insert(LocalFlags::ICANON | LocalFlags::ECHO);
                termios::tcsetattr(self.fd.as_fd(), SetArg::TCSADRAIN, &cooked)
                    .map_err(TermError::Restore)?;
            },
        }
        Ok(())
    }
}

impl<F: AsFd> Drop for TerminalSession<F> {
    fn drop(&mut self) {
        if self.is_active() {
            if let Err(e) = self.leave_raw() {
                tracing::error!("Failed to restore terminal on drop: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_new_session_is_inactive() {
        let session = TerminalSession::new(tempfile::tempfile().unwrap());
        assert!(!session.is_active());
        assert!(session.saved_mode().is_none());
    }

    #[test]
    fn test_enter_raw_on_non_tty_fails_cleanly() {
        let file: File = tempfile::tempfile().unwrap();
        let mut session = TerminalSession::new(file);

        let err = session.enter_raw().unwrap_err();
        assert!(matches!(err, TermError::Query(_)));
        assert!(!session.is_active());
    }

    #[test]
    fn test_leave_raw_on_non_tty_reports_restore_error() {
        let mut session = TerminalSession::new(tempfile::tempfile().unwrap());
        assert!(matches!(session.leave_raw(), Err(TermError::Restore(_))));
    }
}
