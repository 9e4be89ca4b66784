//! Byte-level stream writer and reader over fixed, pre-allocated buffers.
//!
//! The wire format is byte-oriented, so both ends are plain byte cursors.
//! Neither side owns storage: the writer fills a caller-provided slice
//! and never grows it (running out of space is the encode-side
//! backpressure), the reader never looks past its slice.

use crate::{Error, Result};

/// Writes bytes into a fixed-capacity buffer.
///
/// A failed write leaves the position unchanged, so the sink content up
/// to [`bytes_written`](ByteWriter::bytes_written) is always valid.
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    /// Creates a writer over the whole of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Writes a single byte. Fails with `SinkExhausted` when the buffer
    /// is full.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        if self.pos >= self.buf.len() {
            return Err(Error::SinkExhausted { needed: 1, remaining: 0 });
        }
        self.buf[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    /// Writes a byte slice. All-or-nothing: on `SinkExhausted` no prefix
    /// of `bytes` has been written.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let remaining = self.buf.len() - self.pos;
        if bytes.len() > remaining {
            return Err(Error::SinkExhausted { needed: bytes.len(), remaining });
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.pos
    }

    /// Total capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes still available in the sink.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

/// Reads bytes from a slice, advancing a cursor.
#[derive(Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader over the whole of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Reads a single byte. Fails with `PrematureEndOfStream` at the end
    /// of the slice.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        match self.data.get(self.pos) {
            Some(&byte) => {
                self.pos += 1;
                Ok(byte)
            }
            None => Err(Error::PrematureEndOfStream),
        }
    }

    /// Skips `n` bytes (undeclared-field payloads). The position is
    /// unchanged when fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(Error::PrematureEndOfStream);
        }
        self.pos += n;
        Ok(())
    }

    /// Number of bytes consumed so far.
    pub fn bytes_read(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
