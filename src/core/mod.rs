//! Drawing Core Module
//!
//! Platform-independent drawing state. This module contains:
//! - Cursor position and bounded movement
//! - Screen model with optional painted buffer
//!
//! Nothing here touches the terminal device, so every operation is
//! deterministic and testable in isolation.

mod cursor;
mod screen;

pub use cursor::{Cursor, Direction};
pub use screen::{MoveOutcome, ScreenError, ScreenModel, MAX_DIMENSION};
