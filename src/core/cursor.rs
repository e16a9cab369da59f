//! Cursor state management
//!
//! The cursor tracks a 1-based position inside a fixed `cols x rows` extent.
//! Every mutation keeps the position within `[1, cols] x [1, rows]`.

use serde::{Deserialize, Serialize};

/// Direction of a relative cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in h/j/k/l order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::Right,
    ];
}

/// Cursor position (1-based, column `x` and row `y`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Column position (1-indexed)
    pub x: usize,
    /// Row position (1-indexed)
    pub y: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { x: 1, y: 1 }
    }
}

impl Cursor {
    /// Create a cursor at the home position (1, 1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Move cursor to absolute position, clamping to bounds
    pub fn move_to(&mut self, x: usize, y: usize, cols: usize, rows: usize) {
        self.x = x.clamp(1, cols.max(1));
        self.y = y.clamp(1, rows.max(1));
    }

    /// Move cursor up by n rows, stopping at row 1
    ///
    /// Returns the number of rows actually moved. A cursor already on row 1
    /// does not move at all.
    pub fn move_up(&mut self, n: usize) -> usize {
        if self.y <= 1 {
            return 0;
        }
        let step = n.min(self.y - 1);
        self.y -= step;
        step
    }

    /// Move cursor down by n rows, stopping at the last row
    pub fn move_down(&mut self, n: usize, rows: usize) -> usize {
        if self.y >= rows {
            return 0;
        }
        let step = n.min(rows - self.y);
        self.y += step;
        step
    }

    /// Move cursor left by n columns, stopping at column 1
    pub fn move_left(&mut self, n: usize) -> usize {
        if self.x <= 1 {
            return 0;
        }
        let step = n.min(self.x - 1);
        self.x -= step;
        step
    }

    /// Move cursor right by n columns, stopping at the last column
    pub fn move_right(&mut self, n: usize, cols: usize) -> usize {
        if self.x >= cols {
            return 0;
        }
        let step = n.min(cols - self.x);
        self.x += step;
        step
    }

    /// Whether the position lies inside the given extent
    pub fn in_bounds(&self, cols: usize, rows: usize) -> bool {
        (1..=cols).contains(&self.x) && (1..=rows).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_default() {
        let cursor = Cursor::default();
        assert_eq!(cursor.x, 1);
        assert_eq!(cursor.y, 1);
    }

    #[test]
    fn test_cursor_move_to() {
        let mut cursor = Cursor::new();
        cursor.move_to(5, 10, 80, 24);
        assert_eq!((cursor.x, cursor.y), (5, 10));

        // Test clamping
        cursor.move_to(100, 50, 80, 24);
        assert_eq!((cursor.x, cursor.y), (80, 24));

        cursor.move_to(0, 0, 80, 24);
        assert_eq!((cursor.x, cursor.y), (1, 1));
    }

    #[test]
    fn test_cursor_movement() {
        let mut cursor = Cursor::new();
        cursor.move_to(10, 10, 80, 24);

        assert_eq!(cursor.move_up(3), 3);
        assert_eq!(cursor.y, 7);

        assert_eq!(cursor.move_down(5, 24), 5);
        assert_eq!(cursor.y, 12);

        assert_eq!(cursor.move_left(4), 4);
        assert_eq!(cursor.x, 6);

        assert_eq!(cursor.move_right(10, 80), 10);
        assert_eq!(cursor.x, 16);
    }

    #[test]
    fn test_cursor_boundaries() {
        let mut cursor = Cursor::new();

        // Already at the top-left edge
        assert_eq!(cursor.move_up(100), 0);
        assert_eq!(cursor.move_left(100), 0);
        assert_eq!((cursor.x, cursor.y), (1, 1));

        // Large steps stop at the far edge
        assert_eq!(cursor.move_down(100, 24), 23);
        assert_eq!(cursor.y, 24);
        assert_eq!(cursor.move_right(100, 80), 79);
        assert_eq!(cursor.x, 80);

        assert_eq!(cursor.move_down(1, 24), 0);
        assert_eq!(cursor.move_right(1, 80), 0);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let mut cursor = Cursor { x: 2, y: 2 };
        assert_eq!(cursor.move_up(5), 1);
        assert_eq!(cursor.y, 1);
        assert_eq!(cursor.move_left(5), 1);
        assert_eq!(cursor.x, 1);
        assert!(cursor.in_bounds(80, 24));
    }
}
