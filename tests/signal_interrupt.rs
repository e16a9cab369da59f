//! Termination signal tests
//!
//! The handlers are process-wide, so they live in their own test binary and
//! run as a single sequential test. The drawing loop blocks on the slave side
//! of a pty while another thread sends SIGINT to the reading thread.

use std::fs::File;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use nix::pty::{openpty, Winsize};
use nix::sys::pthread::{pthread_kill, pthread_self};
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::sys::termios::{self, Termios};

use termdraw::app::{DrawLoop, ExitReason};
use termdraw::input::InputReader;
use termdraw::term::signal::{install_handlers, TERMINATION_SIGNALS};
use termdraw::{Renderer, ScreenModel, TerminalSession};

fn assert_handlers_interrupt_reads() {
    for signal in TERMINATION_SIGNALS {
        let default_action = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
        // SAFETY: the previous action is put back straight away
        let installed = unsafe { sigaction(signal, &default_action) }.unwrap();
        unsafe { sigaction(signal, &installed) }.unwrap();

        assert!(
            matches!(installed.handler(), SigHandler::Handler(_)),
            "{:?} has no handler",
            signal
        );
        assert!(
            !installed.flags().contains(SaFlags::SA_RESTART),
            "{:?} restarts interrupted reads",
            signal
        );
    }
}

#[test]
fn test_sigint_unblocks_read_and_terminal_is_restored() {
    let shutdown = install_handlers().expect("Failed to install handlers");
    assert!(!shutdown.is_set());
    assert_handlers_interrupt_reads();

    // The master stays open so the slave read blocks instead of failing
    let pty = openpty(None::<&Winsize>, None::<&Termios>).expect("Failed to open pty");
    let before = termios::tcgetattr(&pty.slave).unwrap();

    let mut session = TerminalSession::new(&pty.slave);
    session.enter_raw().expect("Failed to enter raw mode");

    let input = File::from(pty.slave.try_clone().unwrap());
    let model = ScreenModel::new(8, 4).unwrap();
    let mut lp = DrawLoop::new(model, InputReader::new(input), Renderer::new(Vec::new()));
    lp.start().unwrap();

    // Keep signalling until the loop is out: one that lands between the
    // flag check and the read is only seen by the next interrupted read
    let reader_thread = pthread_self();
    let done = Arc::new(AtomicBool::new(false));
    let killer = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            for _ in 0..100 {
                thread::sleep(Duration::from_millis(50));
                if done.load(Ordering::SeqCst) {
                    return;
                }
                pthread_kill(reader_thread, Signal::SIGINT).unwrap();
            }
        })
    };

    let reason = lp.run(&shutdown);
    done.store(true, Ordering::SeqCst);
    killer.join().unwrap();

    assert_eq!(reason.unwrap(), ExitReason::Signal);
    assert!(shutdown.is_set());

    session.leave_raw().expect("Failed to restore terminal");
    assert!(!session.is_active());
    let after = termios::tcgetattr(&pty.slave).unwrap();
    assert_eq!(after.local_flags, before.local_flags);
    assert_eq!(after.input_flags, before.input_flags);
    assert_eq!(after.control_chars, before.control_chars);

    // Nothing was typed, so only the startup frame was drawn
    let (_, renderer) = lp.into_parts();
    assert!(renderer.get_ref().ends_with(b"\x1b[2;4H"));
}
