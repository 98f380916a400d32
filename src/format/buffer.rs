//! Positional reader over a raw database file buffer.

use crate::error::{Error, Result};

/// A bounds-checked reader over the bytes of a database file.
///
/// Reads past the end of the buffer surface as [`Error::Truncated`] rather
/// than panicking; short files are an accepted property of the source
/// format and callers decide whether to abort or skip the file.
pub struct ReadBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ReadBuffer<'a> {
    /// Create a new read buffer over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Get the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the buffer has at least `n` bytes remaining.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Move to an absolute position.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(Error::truncated(
                self.data.len(),
                pos - self.data.len(),
                0,
            ));
        }
        self.pos = pos;
        Ok(())
    }

    /// Skip `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if !self.has_remaining(n) {
            return Err(Error::truncated(self.pos, n, self.remaining()));
        }
        self.pos += n;
        Ok(())
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        if !self.has_remaining(1) {
            return Err(Error::truncated(self.pos, 1, 0));
        }
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    /// Read `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if !self.has_remaining(n) {
            return Err(Error::truncated(self.pos, n, self.remaining()));
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Find the first occurrence of `needle` at or after the current
    /// position. Returns its absolute offset without moving the position.
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || !self.has_remaining(needle.len()) {
            return None;
        }
        self.data[self.pos..]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|idx| self.pos + idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_position() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut buf = ReadBuffer::new(&data);

        assert_eq!(buf.read_u8().unwrap(), 0x01);
        assert_eq!(buf.position(), 1);
        assert_eq!(buf.read_bytes(2).unwrap(), &[0x02, 0x03]);
        assert_eq!(buf.remaining(), 1);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0x01, 0x02];
        let mut buf = ReadBuffer::new(&data);

        let err = buf.read_bytes(3).unwrap_err();
        match err {
            Error::Truncated {
                offset,
                needed,
                available,
            } => {
                assert_eq!(offset, 0);
                assert_eq!(needed, 3);
                assert_eq!(available, 2);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_seek() {
        let data = [0u8; 8];
        let mut buf = ReadBuffer::new(&data);

        buf.seek(6).unwrap();
        assert_eq!(buf.remaining(), 2);
        buf.seek(2).unwrap();
        assert_eq!(buf.position(), 2);
        assert!(buf.seek(9).is_err());
    }

    #[test]
    fn test_find() {
        let data = b"....DataH....";
        let mut buf = ReadBuffer::new(data);

        assert_eq!(buf.find(b"DataH"), Some(4));
        buf.skip(5).unwrap();
        assert_eq!(buf.find(b"DataH"), None);
        assert_eq!(buf.find(b"missing"), None);
    }
}
