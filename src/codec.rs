//! Whole-stream compression and the on-disk format.
//!
//! A compressed stream is the frequency table followed by the bit-packed
//! body, nothing else — no magic number, no version field:
//!
//! ```text
//! +-------------------------------+----------------------------------+
//! | header: 256 x u32 (LE)        | body: concatenated Huffman codes |
//! | occurrence count per byte     | MSB-first, zero-padded to a byte |
//! +-------------------------------+----------------------------------+
//! ```
//!
//! The header is the entire code description: the decoder rebuilds the exact
//! same tree from the same counts (construction is deterministic, see
//! [`crate::tree`]), and the sum of the counts tells it how many symbols to
//! decode. An empty input compresses to an all-zero header with no body.

use std::io::{Read, Write};

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, ALPHABET_SIZE};

/// Size in bytes of the frequency-table header.
pub const HEADER_SIZE: usize = ALPHABET_SIZE * 4;

/// Count the occurrences of each byte value in `data`.
pub fn count_frequencies(data: &[u8]) -> [u32; ALPHABET_SIZE] {
    let mut freqs = [0u32; ALPHABET_SIZE];
    for &byte in data {
        freqs[byte as usize] += 1;
    }
    freqs
}

fn write_header<W: Write>(freqs: &[u32; ALPHABET_SIZE], out: &mut W) -> Result<()> {
    for &freq in freqs {
        out.write_all(&freq.to_le_bytes())?;
    }
    Ok(())
}

fn read_header<R: Read>(input: &mut R) -> Result<[u32; ALPHABET_SIZE]> {
    let mut raw = [0u8; HEADER_SIZE];
    input.read_exact(&mut raw)?;
    let mut freqs = [0u32; ALPHABET_SIZE];
    for (i, field) in raw.chunks_exact(4).enumerate() {
        freqs[i] = u32::from_le_bytes([field[0], field[1], field[2], field[3]]);
    }
    Ok(freqs)
}

/// Compress `data` into `out` as header plus bit-packed body.
///
/// The body holds exactly `ceil(total_code_bits / 8)` bytes; the final byte
/// is zero-padded. Empty input writes an all-zero header and no body.
pub fn compress<W: Write>(data: &[u8], mut out: W) -> Result<()> {
    let freqs = count_frequencies(data);
    write_header(&freqs, &mut out)?;

    let tree = HuffmanTree::build(&freqs);
    let mut writer = BitWriter::new(out);
    for &byte in data {
        tree.encode(byte, &mut writer)?;
    }
    writer.flush()
}

/// Decompress a stream produced by [`compress`], writing the original bytes
/// to `out`. Returns the number of bytes restored.
///
/// The header's count sum dictates exactly how many symbols are decoded;
/// trailing pad bits are never interpreted. A body that ends before the
/// declared count is reached fails with [`Error::Truncated`].
pub fn decompress<R: Read, W: Write>(mut input: R, mut out: W) -> Result<u64> {
    let freqs = read_header(&mut input)?;
    let total: u64 = freqs.iter().map(|&f| u64::from(f)).sum();
    if total == 0 {
        return Ok(0);
    }

    let tree = HuffmanTree::build(&freqs);
    let mut reader = BitReader::new(input);
    for decoded in 0..total {
        match tree.decode(&mut reader)? {
            Some(symbol) => out.write_all(&[symbol])?,
            None => {
                return Err(Error::Truncated {
                    expected: total,
                    decoded,
                })
            }
        }
    }
    Ok(total)
}
