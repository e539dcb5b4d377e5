//! Compression algorithms implementation.
//!
//! This module provides lossless entropy coding:
//! - Huffman prefix codes with deterministic tree construction
//!
//! # Examples
//!
//! ```rust
//! use huffcode::cs::compression::HuffmanCoder;
//!
//! let coder = HuffmanCoder::unicode();
//! let encoded = coder.compress_str("abcdeffgg").unwrap();
//! let stats = encoded.stats();
//! assert!(stats.encoded_bits < stats.original_bits);
//! assert_eq!(coder.decompress_str(&encoded).unwrap(), "abcdeffgg");
//! ```

pub use crate::error::Result;

pub mod huffman;
pub use huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, encode, huffman_decode,
    huffman_encode, CodeTable, CompressionStats, EncodedResult, FrequencyTable, HuffmanCoder,
    HuffmanConfig, HuffmanNode, Symbol,
};
