//! Bounded cursor for scanning a byte buffer.

/// Lightweight cursor over a byte slice.
///
/// Every movement is bounded by the slice length: once the cursor reaches
/// the end, [`peek`](Self::peek) and [`advance`](Self::advance) return `None`
/// and the position stays put.
#[derive(Clone, Copy, Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    /// Current position in bytes (byte offset)
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a new cursor at the start of the bytes.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Are we at end of data?
    #[inline]
    pub fn at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Byte under the cursor, without moving.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    /// Consume the byte under the cursor.
    ///
    /// Returns `None` without moving when at end of data.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    /// Move forward until `pred` matches the byte under the cursor or the end
    /// is reached. The matching byte is not consumed.
    ///
    /// Returns the position the cursor stopped at.
    pub fn advance_until<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let rest = &self.bytes[self.position..];
        let skipped = rest.iter().position(|&b| pred(b)).unwrap_or(rest.len());
        self.position += skipped;
        self.position
    }

    /// Bytes in `[start, end)`, clamped to the underlying slice.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.bytes.len());
        let start = start.min(end);
        &self.bytes[start..end]
    }
}
