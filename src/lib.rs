//! termdraw
//!
//! A minimal interactive drawing tool for the terminal. The crate provides:
//!
//! - `core`: Screen model and bounded cursor
//! - `term`: Raw mode session and termination signals
//! - `input`: Single-byte key reading and key bindings
//! - `render`: ANSI escape sequence output
//! - `app`: Configuration, logging, and the drawing loop

pub mod app;
pub mod core;
pub mod input;
pub mod render;
pub mod term;

pub use app::{AppError, Config, DrawLoop, ExitReason};
pub use crate::core::{Cursor, Direction, MoveOutcome, ScreenModel};
pub use render::{RenderMode, Renderer};
pub use term::{SavedMode, TermError, TerminalSession};
