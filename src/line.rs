//! The growable buffer holding one line of input.

use std::borrow::Cow;
use std::collections::TryReserveError;
use std::fmt;

/// Initial capacity of a freshly allocated command buffer, in bytes.
pub const INITIAL_CAPACITY: usize = 16;

/// One logical line of input, without its trailing newline.
///
/// The buffer is byte-oriented, matching the byte-at-a-time way it is
/// filled by the reader, and grows geometrically: capacity doubles
/// whenever the next byte would leave no spare slot, so the cost of
/// reallocation is amortized over long lines. Growth is fallible; a
/// failed reservation surfaces as an error instead of aborting, so the
/// caller can report which operation ran out of memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    buf: Vec<u8>,
}

impl CommandLine {
    /// An empty line with [`INITIAL_CAPACITY`] bytes pre-allocated.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append one byte, doubling the capacity first when the buffer is
    /// about to run out of room.
    pub fn push(&mut self, byte: u8) -> Result<(), TryReserveError> {
        if self.buf.len() + 1 >= self.buf.capacity() {
            let doubled = (self.buf.capacity() * 2).max(INITIAL_CAPACITY);
            self.buf.try_reserve_exact(doubled - self.buf.len())?;
        }
        self.buf.push(byte);
        Ok(())
    }

    /// The line as text. Bytes that are not valid UTF-8 are replaced,
    /// never dropped.
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Currently allocated capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }
}

impl Default for CommandLine {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CommandLine {
    fn from(s: &str) -> Self {
        Self {
            buf: s.as_bytes().to_vec(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(len: usize) -> CommandLine {
        let mut line = CommandLine::new();
        for i in 0..len {
            line.push(b'a' + (i % 26) as u8).unwrap();
        }
        line
    }

    #[test]
    fn starts_at_initial_capacity() {
        let line = CommandLine::new();
        assert_eq!(line.capacity(), INITIAL_CAPACITY);
        assert!(line.is_empty());
    }

    #[test]
    fn short_line_does_not_grow() {
        let line = filled(10);
        assert_eq!(line.capacity(), INITIAL_CAPACITY);
        assert_eq!(line.len(), 10);
    }

    #[test]
    fn capacity_is_smallest_power_of_two_multiple_above_length() {
        for (len, expected) in [(16, 32), (17, 32), (31, 32), (32, 64), (100, 128)] {
            let line = filled(len);
            assert_eq!(
                line.capacity(),
                expected,
                "capacity after {len} bytes should be {expected}"
            );
        }
    }

    #[test]
    fn growth_preserves_content() {
        let line = filled(100);
        let expected: String = (0..100)
            .map(|i| (b'a' + (i % 26) as u8) as char)
            .collect();
        assert_eq!(line.as_str(), expected.as_str());
    }

    #[test]
    fn clones_are_independent() {
        let original = CommandLine::from("ls -la");
        let mut copy = original.clone();
        copy.push(b'!').unwrap();
        assert_eq!(original.as_str(), "ls -la");
        assert_eq!(copy.as_str(), "ls -la!");
    }
}
