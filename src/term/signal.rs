//! Termination signals
//!
//! SIGINT, SIGQUIT, SIGTERM and SIGHUP are caught and turned into a flag the
//! input loop polls. The handlers are installed without `SA_RESTART`, so a
//! read blocked on the terminal returns `EINTR` and the loop gets a chance to
//! unwind and restore the terminal. ISIG stays on in raw mode, so `Ctrl-\`
//! raises SIGQUIT and must not fall through to the core-dumping default.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nix::libc::c_int;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

use super::{TermError, TermResult};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Signals that end a drawing session
pub const TERMINATION_SIGNALS: [Signal; 4] = [
    Signal::SIGINT,
    Signal::SIGQUIT,
    Signal::SIGTERM,
    Signal::SIGHUP,
];

extern "C" fn on_termination(_: c_int) {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

/// Termination flag polled by the input loop
///
/// A flag returned by [`install_handlers`] also observes the signal handlers;
/// one created with [`ShutdownFlag::new`] only reacts to [`trigger`](Self::trigger).
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    local: Arc<AtomicBool>,
    signals: bool,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.local.load(Ordering::SeqCst) || (self.signals && SHUTDOWN.load(Ordering::SeqCst))
    }

    /// Request termination as if a signal had arrived
    pub fn trigger(&self) {
        self.local.store(true, Ordering::SeqCst);
    }
}

/// Install the termination handlers and return the flag they raise
pub fn install_handlers() -> TermResult<ShutdownFlag> {
    let action = SigAction::new(
        SigHandler::Handler(on_termination),
        SaFlags::empty(),
        SigSet::empty(),
    );
    for signal in TERMINATION_SIGNALS {
        // SAFETY: the handler only stores into an atomic, which is
        // async-signal-safe
        unsafe { sigaction(signal, &action) }
            .map_err(|source| TermError::Signal { signal, source })?;
    }
    tracing::debug!("Installed termination signal handlers");
    Ok(ShutdownFlag {
        local: Arc::new(AtomicBool::new(false)),
        signals: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_is_shared_between_clones() {
        let flag = ShutdownFlag::new();
        let observer = flag.clone();
        assert!(!observer.is_set());
        flag.trigger();
        assert!(observer.is_set());
    }

    #[test]
    fn test_keyboard_signals_are_handled() {
        // Both are generated by the tty while ISIG is on
        assert!(TERMINATION_SIGNALS.contains(&Signal::SIGINT));
        assert!(TERMINATION_SIGNALS.contains(&Signal::SIGQUIT));
    }

    #[test]
    fn test_local_flag_ignores_signal_state() {
        let flag = ShutdownFlag::new();
        on_termination(Signal::SIGINT as c_int);
        assert!(!flag.is_set());
        SHUTDOWN.store(false, Ordering::SeqCst);
    }
}
