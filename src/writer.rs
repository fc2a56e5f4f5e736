//! Output cursors for the encoder
//!
//! The scanner writes through the [`Sink`] trait so the same single pass
//! can either fill a caller buffer ([`ByteWriter`]) or just measure the
//! record ([`LenCounter`]).

use crate::SIZE_HINT;

/// Byte destination driven by the scanner
pub trait Sink {
    /// Write one byte
    fn put_u8(&mut self, value: u8);

    /// Write raw bytes
    fn put_slice(&mut self, bytes: &[u8]);

    /// Number of bytes written so far
    fn position(&self) -> usize;

    /// Set the high bit of the last byte written
    fn tag_last(&mut self);
}

/// Single-pass writer over a caller-provided buffer
///
/// Writes are not checked against the remaining capacity: the caller sizes
/// the buffer. Writing past the end panics through slice indexing.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    /// Create new writer at the start of the given buffer
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl Sink for ByteWriter<'_> {
    #[inline]
    fn put_u8(&mut self, value: u8) {
        self.buf[self.pos] = value;
        self.pos += 1;
    }

    #[inline]
    fn put_slice(&mut self, bytes: &[u8]) {
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn tag_last(&mut self) {
        self.buf[self.pos - 1] |= SIZE_HINT;
    }
}

/// Sink that only counts bytes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LenCounter {
    len: usize,
}

impl LenCounter {
    /// Create a counter at zero
    #[inline]
    pub const fn new() -> Self {
        Self { len: 0 }
    }
}

impl Sink for LenCounter {
    #[inline]
    fn put_u8(&mut self, _value: u8) {
        self.len += 1;
    }

    #[inline]
    fn put_slice(&mut self, bytes: &[u8]) {
        self.len += bytes.len();
    }

    #[inline]
    fn position(&self) -> usize {
        self.len
    }

    #[inline]
    fn tag_last(&mut self) {}
}
