//! Error types for the Huffman codec.

use thiserror::Error;

/// Error variants for compression and decompression.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred on the underlying byte source or sink.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The compressed body ended before the header-declared symbol count
    /// was fully decoded.
    #[error("truncated stream: expected {expected} symbols, decoded {decoded}")]
    Truncated {
        /// Symbol count declared by the frequency-table header.
        expected: u64,
        /// Symbols successfully decoded before the stream ran out.
        decoded: u64,
    },
}

/// A specialized Result type for Huffman codec operations.
pub type Result<T> = std::result::Result<T, Error>;
