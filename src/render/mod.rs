//! Terminal output
//!
//! Translates screen model state into escape sequences. Every operation
//! flushes before returning, so a frame is fully visible before the next
//! key is read.

pub mod ansi;

use std::io::{self, Stdout, Write};

use crate::core::{Direction, ScreenModel};

/// How each keystroke is reflected on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Redraw every cell with the pressed key
    #[default]
    Fill,
    /// Paint the pressed key under the cursor and redraw from the buffer
    Buffer,
    /// Emit only the relative move and the painted cell
    Delta,
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fill" => Ok(Self::Fill),
            "buffer" => Ok(Self::Buffer),
            "delta" => Ok(Self::Delta),
            other => Err(format!("unknown render mode '{}'", other)),
        }
    }
}

/// Escape sequence writer over any byte sink
pub struct Renderer<W: Write = Stdout> {
    out: W,
}

impl Renderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Erase the whole display (issued once at startup)
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.out.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
        self.out.flush()
    }

    /// Redraw every cell, then put the terminal cursor on the model's cursor
    ///
    /// Buffered models draw their buffer; otherwise every cell shows `fill`.
    pub fn render_full(&mut self, model: &ScreenModel, fill: u8) -> io::Result<()> {
        let cols = model.cols();
        let capacity = (cols + 1)
            .checked_mul(model.rows())
            .and_then(|body| body.checked_add(32))
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "frame too large"))?;
        let mut frame = Vec::with_capacity(capacity);
        frame.extend_from_slice(ansi::cursor_position(1, 1).as_bytes());

        match model.buffer() {
            Some(buf) => {
                for row in buf.chunks(cols) {
                    frame.extend_from_slice(row);
                    frame.push(b'\n');
                }
            },
            None => {
                let line = vec![fill; cols];
                for _ in 0..model.rows() {
                    frame.extend_from_slice(&line);
                    frame.push(b'\n');
                }
            },
        }

        let home = ansi::cursor_position(model.cursor_x(), model.cursor_y());
        frame.extend_from_slice(home.as_bytes());
        self.out.write_all(&frame)?;
        self.out.flush()
    }

    /// Relative move of the terminal cursor
    pub fn emit_move(&mut self, direction: Direction, n: usize) -> io::Result<()> {
        self.out.write_all(ansi::relative_move(direction, n).as_bytes())?;
        self.out.flush()
    }

    /// Absolute move of the terminal cursor (1-based)
    pub fn reposition(&mut self, x: usize, y: usize) -> io::Result<()> {
        self.out.write_all(ansi::cursor_position(x, y).as_bytes())?;
        self.out.flush()
    }

    /// Paint `c` on the cell under the model's cursor without a full redraw
    pub fn paint_at(&mut self, model: &ScreenModel, c: u8) -> io::Result<()> {
        let (x, y) = (model.cursor_x(), model.cursor_y());
        let mut seq = Vec::with_capacity(24);
        seq.extend_from_slice(ansi::cursor_position(x, y).as_bytes());
        seq.push(c);
        // Writing advances the terminal cursor; park it back on the cell
        seq.extend_from_slice(ansi::cursor_position(x, y).as_bytes());
        self.out.write_all(&seq)?;
        self.out.flush()
    }
}
