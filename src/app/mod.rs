//! Application glue module
//!
//! Configuration, logging, and the composition root that ties the terminal
//! session, screen model, input reader and renderer together.

mod config;
mod draw_loop;
pub mod logging;

use std::io::{self, Read, Write};

pub use config::{Config, ConfigError, LogConfig, ScreenConfig};
pub use draw_loop::{DrawLoop, ExitReason, Step};

use crate::core::{ScreenError, ScreenModel};
use crate::input::InputReader;
use crate::render::Renderer;
use crate::term::{self, TermError, TerminalSession};

/// Top-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Term(#[from] TermError),

    #[error("{0}")]
    Screen(#[from] ScreenError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Build a drawing loop from configuration over arbitrary I/O
pub fn build_loop<R: Read, W: Write>(
    config: &Config,
    reader: InputReader<R>,
    renderer: Renderer<W>,
) -> Result<DrawLoop<R, W>, AppError> {
    config.validate()?;

    let screen = &config.screen;
    let mut model = ScreenModel::new(screen.columns, screen.rows)?;
    if let Some((x, y)) = screen.cursor {
        model = model.with_cursor(x, y);
    }

    Ok(DrawLoop::new(model, reader, renderer)
        .with_keys(config.keys)
        .with_initial_fill(screen.initial_fill_byte())
        .with_mode(config.render_mode))
}

/// Run an interactive session on the controlling terminal
///
/// Fails without touching the display if raw mode cannot be entered. Once
/// raw mode is engaged the saved attributes are restored on every exit path.
pub fn run(config: &Config) -> Result<ExitReason, AppError> {
    let shutdown = term::signal::install_handlers()?;

    let mut session = TerminalSession::stdin();
    session.enter_raw()?;
    tracing::info!(
        cols = config.screen.columns,
        rows = config.screen.rows,
        mode = ?config.render_mode,
        "Raw mode engaged"
    );

    let result = build_loop(config, InputReader::stdin(), Renderer::stdout()).and_then(|mut lp| {
        lp.start()?;
        Ok(lp.run(&shutdown)?)
    });

    if let Err(e) = session.leave_raw() {
        logging::report(&config.log, &e.to_string());
    }

    result
}
