//! Input handling
//!
//! Reads single bytes from the terminal and decodes them into drawing
//! commands.

use std::io::{self, Read, Stdin};

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Outcome of one attempt to read a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A byte was read (NUL when the read failed)
    Key(u8),
    /// The read was interrupted by a signal
    Interrupted,
    /// The input stream is closed
    Eof,
}

/// Blocking, one-byte-at-a-time reader
pub struct InputReader<R: Read = Stdin> {
    input: R,
}

impl InputReader<Stdin> {
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<R: Read> InputReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read exactly one byte, blocking until it is available
    pub fn read_one_char(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        match self.input.read(&mut buf)? {
            0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")),
            _ => Ok(buf[0]),
        }
    }

    /// Read one key, treating a failed read as NUL
    pub fn read_event(&mut self) -> InputEvent {
        match self.read_one_char() {
            Ok(byte) => InputEvent::Key(byte),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => InputEvent::Interrupted,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => InputEvent::Eof,
            Err(e) => {
                tracing::warn!("read() failed: {}", e);
                InputEvent::Key(0)
            },
        }
    }
}

/// Whitespace as the C locale's `isspace` defines it
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Keys that move the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: char,
    pub down: char,
    pub up: char,
    pub right: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: 'h',
            down: 'j',
            up: 'k',
            right: 'l',
        }
    }
}

impl KeyBindings {
    /// Direction bound to a byte, if any
    pub fn direction(&self, byte: u8) -> Option<Direction> {
        let key = byte as char;
        if !byte.is_ascii() {
            None
        } else if key == self.left {
            Some(Direction::Left)
        } else if key == self.down {
            Some(Direction::Down)
        } else if key == self.up {
            Some(Direction::Up)
        } else if key == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Bound keys in (Left, Down, Up, Right) order
    pub fn keys(&self) -> [char; 4] {
        [self.left, self.down, self.up, self.right]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that fails every call with the given error kind
    struct Failing(io::ErrorKind);

    impl Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "boom"))
        }
    }

    #[test]
    fn test_reads_one_byte_at_a_time() {
        let mut reader = InputReader::new(Cursor::new(b"hj".to_vec()));
        assert_eq!(reader.read_one_char().unwrap(), b'h');
        assert_eq!(reader.read_one_char().unwrap(), b'j');
        assert_eq!(
            reader.read_one_char().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_read_event_classification() {
        let mut reader = InputReader::new(Cursor::new(b"x".to_vec()));
        assert_eq!(reader.read_event(), InputEvent::Key(b'x'));
        assert_eq!(reader.read_event(), InputEvent::Eof);

        let mut reader = InputReader::new(Failing(io::ErrorKind::Interrupted));
        assert_eq!(reader.read_event(), InputEvent::Interrupted);
    }

    #[test]
    fn test_failed_read_becomes_nul() {
        let mut reader = InputReader::new(Failing(io::ErrorKind::Other));
        assert_eq!(reader.read_event(), InputEvent::Key(0));
    }

    #[test]
    fn test_is_space_matches_c_locale() {
        for b in [b' ', b'\t', b'\n', b'\r', 0x0b, 0x0c] {
            assert!(is_space(b), "{:#x} should be whitespace", b);
        }
        for b in [b'q', b'h', 0u8, 0x1b] {
            assert!(!is_space(b));
        }
    }

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.direction(b'h'), Some(Direction::Left));
        assert_eq!(keys.direction(b'j'), Some(Direction::Down));
        assert_eq!(keys.direction(b'k'), Some(Direction::Up));
        assert_eq!(keys.direction(b'l'), Some(Direction::Right));
        assert_eq!(keys.direction(b'q'), None);
        assert_eq!(keys.direction(0xe8), None);
    }
}
