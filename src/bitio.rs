//! Bit-level adapters over byte-oriented I/O.
//!
//! Huffman codes are variable-length bit strings, but `Read`/`Write` move
//! whole bytes. [`BitWriter`] packs bits most-significant-bit-first into a
//! one-byte buffer and emits each byte as it fills; [`BitReader`] does the
//! reverse, pulling one byte at a time and handing out its bits MSB-first.
//!
//! End-of-data is not an error: [`BitReader::read_bit`] returns `Ok(None)`
//! once the source is exhausted, and keeps returning it on every later call.

use std::io::{self, Read, Write};

use crate::error::Result;

/// Packs single bits into bytes, MSB-first, over any byte sink.
pub struct BitWriter<W: Write> {
    sink: W,
    buf: u8,
    /// Next free bit slot, counted from the most-significant bit (0..=7).
    nbits: u8,
}

impl<W: Write> BitWriter<W> {
    /// Create a writer with an empty bit buffer over `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            buf: 0,
            nbits: 0,
        }
    }

    /// Write the least-significant bit of `bit` to the stream.
    ///
    /// Any value is accepted; everything above the low bit is ignored.
    pub fn write_bit(&mut self, bit: u8) -> Result<()> {
        if self.nbits > 7 {
            self.flush()?;
        }
        self.buf |= (bit & 1) << (7 - self.nbits);
        self.nbits += 1;
        Ok(())
    }

    /// Emit any buffered bits as one byte, low bits zero-padded.
    ///
    /// Flushing an empty buffer writes nothing: total output is always
    /// exactly `ceil(bits_written / 8)` bytes. The buffer and bit index are
    /// reset either way. Call once at the end of an encoding pass.
    pub fn flush(&mut self) -> Result<()> {
        if self.nbits > 0 {
            self.sink.write_all(&[self.buf])?;
        }
        self.sink.flush()?;
        self.buf = 0;
        self.nbits = 0;
        Ok(())
    }
}

/// Unpacks single bits from bytes, MSB-first, over any byte source.
pub struct BitReader<R: Read> {
    source: R,
    buf: u8,
    /// Next unread bit slot from the MSB; 8 means the buffer is exhausted.
    nbits: u8,
}

impl<R: Read> BitReader<R> {
    /// Create a reader over `source`, starting with an exhausted buffer.
    pub fn new(source: R) -> Self {
        Self {
            source,
            buf: 0,
            nbits: 8,
        }
    }

    /// Read one bit, pulling the next byte from the source if needed.
    ///
    /// Returns `Ok(Some(0))` or `Ok(Some(1))`, or `Ok(None)` once the source
    /// is exhausted. EOF is idempotent: the buffer is left untouched, so
    /// every subsequent call also returns `Ok(None)`.
    pub fn read_bit(&mut self) -> Result<Option<u8>> {
        if self.nbits > 7 {
            let mut byte = [0u8; 1];
            match self.source.read_exact(&mut byte) {
                Ok(()) => {
                    self.buf = byte[0];
                    self.nbits = 0;
                }
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
        let bit = (self.buf >> (7 - self.nbits)) & 1;
        self.nbits += 1;
        Ok(Some(bit))
    }
}
