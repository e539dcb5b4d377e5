//! Error types shared by the compression modules.

use thiserror::Error;

/// Errors surfaced by Huffman compression and decompression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// `compress` was called on a zero-length sequence.
    #[error("cannot compress an empty input")]
    EmptyInput,

    /// The bit-sequence contains a character other than '0' or '1'.
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },

    /// The bit-sequence ended while the decoder was between the root and a leaf.
    #[error("bit-sequence ends mid-code after {position} bits")]
    IncompleteCode { position: usize },

    /// Decoding reached the placeholder leaf, which stands for no real symbol.
    #[error("code ending at bit {position} maps to the synthetic placeholder leaf")]
    SentinelReached { position: usize },

    /// An input symbol lies outside the configured alphabet.
    #[error("symbol {symbol} is outside the alphabet of size {alphabet_size}")]
    SymbolOutOfAlphabet { symbol: u32, alphabet_size: u32 },

    /// A decoded symbol cannot be converted to the requested output type.
    #[error("decoded symbol {symbol} does not fit the output type")]
    SymbolOutOfRange { symbol: u32 },

    /// The configuration cannot be used to build a tree.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for compression operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
