//! # Huffman Coding
//!
//! *Optimal prefix codes from a frequency table, one bit at a time.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letter (E) the shortest signal (a single
//! dot). Huffman coding does the same for bytes, but derives the code lengths
//! from the data itself: count how often each byte occurs, then repeatedly
//! merge the two rarest things into one, building a binary tree from the
//! leaves up. Frequent bytes end up near the root (short codes), rare bytes
//! end up deep (long codes).
//!
//! Because every symbol sits at a *leaf*, no code is a prefix of another —
//! the decoder can walk the tree bit by bit and always knows, without any
//! delimiter, when a symbol ends.
//!
//! ## The Problem
//!
//! A prefix code is only useful if the encoder and decoder agree on it
//! *exactly*. This crate transmits nothing but the raw frequency table; the
//! decoder rebuilds the tree from scratch. Any ambiguity in construction —
//! ties between equal weights resolved differently on either side — silently
//! desynchronizes the two trees and garbles every symbol after the first
//! divergence. Determinism is therefore the central design constraint, not an
//! implementation detail: merges always take the lowest weight first, and
//! among equal weights the lowest symbol value first.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon    Entropy as the fundamental limit
//! 1949  Fano       Top-down splitting: close, but not optimal
//! 1952  Huffman    Bottom-up merging: provably optimal prefix codes
//! 1976  Rissanen   Arithmetic coding: closes Huffman's whole-bit gap
//! 1996  DEFLATE    Huffman as the entropy stage of zip/gzip/png
//! 2007  Duda       ANS: arithmetic-coding rates at Huffman speeds
//! ```
//!
//! David Huffman solved this as a term paper at MIT, famously sidestepping
//! the final exam. His insight was to build the tree from the *least* likely
//! symbols upward, where Fano had split from the most likely downward.
//!
//! ## Mathematical Formulation
//!
//! Given symbol probabilities $p_s$, Huffman's algorithm produces code
//! lengths $\ell_s$ minimizing the expected length $\sum_s p_s \ell_s$:
//!
//! ```text
//! H(P) <= sum(p_s * l_s) < H(P) + 1
//! ```
//!
//! where $H(P)$ is the Shannon entropy. The one-bit gap is the price of
//! restricting code lengths to whole bits.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(k \log k)$ for $k \le 256$ distinct symbols.
//! - **Encode/decode**: $O(d)$ per symbol, where $d$ is the code length.
//! - **Space**: one arena of at most $2k - 1$ nodes.
//!
//! ## Failure Modes
//!
//! 1. **Skewed data**: exponentially skewed frequencies over the full
//!    alphabet can produce codes hundreds of bits long; correct, but far
//!    from the few-bit average the common case enjoys.
//! 2. **Tiny inputs**: the fixed 1024-byte frequency header dwarfs the body
//!    for small files — compression only pays off past a few kilobytes.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`HuffmanTree`]: deterministic tree construction plus per-symbol
//!   `encode`/`decode`.
//! - [`BitWriter`]/[`BitReader`]: MSB-first bit packing over any
//!   byte-oriented `Write`/`Read`.
//! - [`compress`]/[`decompress`]: the whole-stream codec and its on-disk
//!   format (frequency-table header, bit-packed body).
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Moffat, A. (2019). "Huffman Coding." ACM Computing Surveys.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitio;
pub mod codec;
pub mod error;
pub mod tree;

pub use bitio::{BitReader, BitWriter};
pub use codec::{compress, count_frequencies, decompress, HEADER_SIZE};
pub use error::{Error, Result};
pub use tree::{HuffmanTree, ALPHABET_SIZE};
