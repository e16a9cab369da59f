//! Terminal device handling
//!
//! This module owns the terminal's input mode (raw vs cooked) and the
//! process-wide termination signals that end a drawing session.

mod session;
pub mod signal;

pub use session::{SavedMode, TerminalSession};
pub use signal::ShutdownFlag;

/// Error type for terminal configuration (termios) operations
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("Failed to query terminal attributes: {0}")]
    Query(#[source] nix::Error),

    #[error("Failed to apply raw mode attributes: {0}")]
    Apply(#[source] nix::Error),

    #[error("Failed to restore terminal attributes: {0}")]
    Restore(#[source] nix::Error),

    #[error("Failed to install handler for {signal}: {source}")]
    Signal {
        signal: nix::sys::signal::Signal,
        #[source]
        source: nix::Error,
    },
}

/// Result type for terminal operations
pub type TermResult<T> = Result<T, TermError>;
