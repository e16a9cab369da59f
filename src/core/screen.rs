//! Screen model implementation
//!
//! The screen model owns the fixed drawing extent, the logical cursor and an
//! optional row-major buffer mirroring what has been painted. It never talks
//! to the terminal; the renderer reads it to produce output.

use super::cursor::{Cursor, Direction};

/// Largest accepted width or height
///
/// A full redraw holds one frame of `(cols + 1) * rows` bytes in memory, so
/// the extent is capped well below anything that could exhaust it.
pub const MAX_DIMENSION: usize = 4096;

/// Error type for screen model construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
    #[error("Screen dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },
    #[error("Screen dimensions must not exceed {max}, got {cols}x{rows}")]
    TooLarge { cols: usize, rows: usize, max: usize },
}

/// Result of a bounded cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    /// Cells actually travelled (0 when the cursor was already at the edge)
    pub applied: usize,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        self.applied > 0
    }
}

/// Logical screen: extent, cursor and optional painted buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    cols: usize,
    rows: usize,
    cursor: Cursor,
    buffer: Option<Vec<u8>>,
}

impl ScreenModel {
    /// Create a model with the cursor at the center of the extent
    pub fn new(cols: usize, rows: usize) -> Result<Self, ScreenError> {
        if cols == 0 || rows == 0 {
            return Err(ScreenError::InvalidDimensions { cols, rows });
        }
        if cols > MAX_DIMENSION || rows > MAX_DIMENSION {
            return Err(ScreenError::TooLarge {
                cols,
                rows,
                max: MAX_DIMENSION,
            });
        }
        let mut cursor = Cursor::new();
        cursor.move_to(cols / 2, rows / 2, cols, rows);
        Ok(Self {
            cols,
            rows,
            cursor,
            buffer: None,
        })
    }

    /// Place the cursor at an explicit starting position (clamped)
    pub fn with_cursor(mut self, x: usize, y: usize) -> Self {
        self.cursor.move_to(x, y, self.cols, self.rows);
        self
    }

    /// Back the model with a buffer filled with `filler`
    pub fn with_buffer(mut self, filler: u8) -> Self {
        self.buffer = Some(vec![filler; self.cell_count()]);
        self
    }

    /// Number of cells in the extent
    pub fn cell_count(&self) -> usize {
        // Both sides are capped at MAX_DIMENSION by `new`
        self.cols * self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Cursor column (1-based)
    pub fn cursor_x(&self) -> usize {
        self.cursor.x
    }

    /// Cursor row (1-based)
    pub fn cursor_y(&self) -> usize {
        self.cursor.y
    }

    pub fn is_buffered(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Option<&[u8]> {
        self.buffer.as_deref()
    }

    /// Row-major buffer index of a 1-based position
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        if (1..=self.cols).contains(&x) && (1..=self.rows).contains(&y) {
            Some((y - 1) * self.cols + (x - 1))
        } else {
            None
        }
    }

    /// Byte painted at a 1-based position, if the model is buffered
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        let idx = self.index(x, y)?;
        self.buffer.as_ref().map(|buf| buf[idx])
    }

    /// One buffered row (1-based)
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = self.index(1, y)?;
        self.buffer
            .as_ref()
            .map(|buf| &buf[start..start + self.cols])
    }

    /// Move the cursor by `n` cells in `direction`
    ///
    /// A cursor already sitting on the edge it is moving towards does not
    /// move. Otherwise the step stops at the edge.
    pub fn move_cursor(&mut self, direction: Direction, n: usize) -> MoveOutcome {
        let applied = match direction {
            Direction::Up => self.cursor.move_up(n),
            Direction::Down => self.cursor.move_down(n, self.rows),
            Direction::Left => self.cursor.move_left(n),
            Direction::Right => self.cursor.move_right(n, self.cols),
        };
        debug_assert!(self.cursor.in_bounds(self.cols, self.rows));
        tracing::trace!(?direction, n, applied, x = self.cursor.x, y = self.cursor.y, "move");
        MoveOutcome { direction, applied }
    }

    /// Absolute positioning, clamped into the extent
    pub fn move_to(&mut self, x: usize, y: usize) {
        self.cursor.move_to(x, y, self.cols, self.rows);
    }

    /// Paint `c` into the buffer cell under the cursor
    pub fn write_at_cursor(&mut self, c: u8) {
        let idx = (self.cursor.y - 1) * self.cols + (self.cursor.x - 1);
        if let Some(buf) = self.buffer.as_mut() {
            buf[idx] = c;
        }
    }

    /// Paint every buffer cell with `c`
    pub fn fill(&mut self, c: u8) {
        if let Some(buf) = self.buffer.as_mut() {
            buf.fill(c);
        }
    }

    /// Buffer contents as text, one line per row
    pub fn to_text(&self) -> Option<String> {
        let buf = self.buffer.as_ref()?;
        let mut out = String::with_capacity(buf.len() + self.rows);
        for row in buf.chunks(self.cols) {
            out.push_str(&String::from_utf8_lossy(row));
            out.push('\n');
        }
        Some(out)
    }
}
