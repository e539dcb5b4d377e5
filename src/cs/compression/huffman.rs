//! Huffman prefix-code compression.
//!
//! Compression runs a fixed pipeline over a fully buffered input:
//!
//! 1. [`build_frequency_table`] counts each symbol in one pass.
//! 2. [`build_huffman_tree`] greedily merges the two lightest nodes until one
//!    root remains. Ties are broken by symbol value, so the same input always
//!    yields the same tree.
//! 3. [`build_code_table`] walks the tree once, '0' for left and '1' for right.
//! 4. [`encode`] concatenates the code of every input symbol.
//!
//! The result is an [`EncodedResult`]: the bit-sequence plus the tree.
//! [`decode`] needs only that pair, walking the tree bit by bit.
//!
//! Symbols are `u32` values in `0..alphabet_size`, where the alphabet size
//! comes from [`HuffmanConfig`]. The value `alphabet_size` itself is reserved
//! for the placeholder leaf added when the input has a single distinct symbol.
//!
//! # Examples
//!
//! ```rust
//! use huffcode::cs::compression::huffman::{huffman_decode, huffman_encode};
//!
//! let encoded = huffman_encode("abcdeffgg").unwrap();
//! assert!(encoded.bits.chars().all(|bit| bit == '0' || bit == '1'));
//! assert_eq!(huffman_decode(&encoded).unwrap(), "abcdeffgg");
//! ```

/// One unit of input, drawn from `0..HuffmanConfig::alphabet_size`.
pub type Symbol = u32;

pub mod code_table;
pub mod coder;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod stats;
pub mod tree;

pub use code_table::{build_code_table, CodeTable};
pub use coder::{huffman_decode, huffman_encode, HuffmanCoder};
pub use config::{HuffmanConfig, BYTE_ALPHABET_SIZE, UNICODE_ALPHABET_SIZE};
pub use decoder::decode;
pub use encoder::{encode, EncodedResult};
pub use frequency::{build_frequency_table, FrequencyTable};
pub use stats::CompressionStats;
pub use tree::{build_huffman_tree, HuffmanNode};
