//! ANSI/VT100 escape sequence encoding
//!
//! The subset the drawing tool speaks: relative cursor moves (CUU/CUD/CUF/CUB),
//! absolute positioning (CUP) and full-screen erase (ED 2).

use std::fmt::Write;

use crate::core::Direction;

/// Control Sequence Introducer
pub const CSI: &str = "\x1b[";

/// Erase the entire display
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Final byte of the relative move sequence for a direction
pub fn move_final(direction: Direction) -> char {
    match direction {
        Direction::Up => 'A',
        Direction::Down => 'B',
        Direction::Right => 'C',
        Direction::Left => 'D',
    }
}

/// `CSI n A/B/C/D`; empty when `n == 0`
pub fn relative_move(direction: Direction, n: usize) -> String {
    let mut seq = String::new();
    if n > 0 {
        let _ = write!(seq, "{}{}{}", CSI, n, move_final(direction));
    }
    seq
}

/// `CSI row;col H` for a 1-based column `x` and row `y`
pub fn cursor_position(x: usize, y: usize) -> String {
    format!("{}{};{}H", CSI, y, x)
}
