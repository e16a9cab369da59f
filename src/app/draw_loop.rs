//! The interactive drawing loop
//!
//! Reads a key, moves the cursor, redraws, and repeats until a termination
//! signal arrives or the input closes.

use std::io::{self, Read, Write};

use crate::core::{MoveOutcome, ScreenModel};
use crate::input::{is_space, InputEvent, InputReader, KeyBindings};
use crate::render::{RenderMode, Renderer};
use crate::term::ShutdownFlag;

/// What one key did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Whitespace: consumed without moving or drawing
    Skipped,
    /// The key was drawn; `moved` is set when it was a movement key
    Drawn { key: u8, moved: Option<MoveOutcome> },
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Signal,
    Eof,
}

pub struct DrawLoop<R: Read, W: Write> {
    model: ScreenModel,
    reader: InputReader<R>,
    renderer: Renderer<W>,
    keys: KeyBindings,
    mode: RenderMode,
    initial_fill: u8,
}

impl<R: Read, W: Write> DrawLoop<R, W> {
    pub fn new(model: ScreenModel, reader: InputReader<R>, renderer: Renderer<W>) -> Self {
        Self {
            model,
            reader,
            renderer,
            keys: KeyBindings::default(),
            mode: RenderMode::Fill,
            initial_fill: b'0',
        }
    }

    pub fn with_keys(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    /// Buffer mode backs the model with a buffer if it has none yet
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        if mode == RenderMode::Buffer && !self.model.is_buffered() {
            self.model = self.model.clone().with_buffer(self.initial_fill);
        }
        self
    }

    pub fn with_initial_fill(mut self, fill: u8) -> Self {
        self.initial_fill = fill;
        self.model.fill(fill);
        self
    }

    pub fn model(&self) -> &ScreenModel {
        &self.model
    }

    pub fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }

    pub fn into_parts(self) -> (ScreenModel, Renderer<W>) {
        (self.model, self.renderer)
    }

    /// Clear the display and paint the initial canvas
    pub fn start(&mut self) -> io::Result<()> {
        self.renderer.clear_screen()?;
        self.renderer.render_full(&self.model, self.initial_fill)
    }

    /// Apply one key to the model and the display
    pub fn handle_key(&mut self, key: u8) -> io::Result<Step> {
        if is_space(key) {
            return Ok(Step::Skipped);
        }

        let moved = self
            .keys
            .direction(key)
            .map(|direction| self.model.move_cursor(direction, 1));
        tracing::debug!(
            key,
            x = self.model.cursor_x(),
            y = self.model.cursor_y(),
            "key handled"
        );

        match self.mode {
            RenderMode::Fill => self.renderer.render_full(&self.model, key)?,
            RenderMode::Buffer => {
                self.model.write_at_cursor(key);
                self.renderer.render_full(&self.model, key)?;
            },
            RenderMode::Delta => {
                if let Some(outcome) = moved.filter(MoveOutcome::moved) {
                    self.renderer.emit_move(outcome.direction, outcome.applied)?;
                }
                self.model.write_at_cursor(key);
                self.renderer.paint_at(&self.model, key)?;
            },
        }

        Ok(Step::Drawn { key, moved })
    }

    /// Run until `shutdown` is raised or the input ends
    ///
    /// A signal landing between the flag check and the blocking read is only
    /// noticed once that read returns, i.e. on the next key.
    pub fn run(&mut self, shutdown: &ShutdownFlag) -> io::Result<ExitReason> {
        loop {
            if shutdown.is_set() {
                tracing::info!("Termination requested");
                return Ok(ExitReason::Signal);
            }
            match self.reader.read_event() {
                InputEvent::Key(key) => {
                    self.handle_key(key)?;
                },
                InputEvent::Interrupted => continue,
                InputEvent::Eof => {
                    tracing::info!("Input closed");
                    return Ok(ExitReason::Eof);
                },
            }
        }
    }
}
