use log::debug;

use super::{
    build_code_table, build_frequency_table, build_huffman_tree, encode, EncodedResult,
    HuffmanConfig, Symbol,
};
use crate::error::{HuffmanError, Result};

/// Huffman compressor/decompressor for one alphabet.
///
/// # Example
///
/// ```
/// use huffcode::cs::compression::huffman::HuffmanCoder;
///
/// let coder = HuffmanCoder::bytes();
/// let encoded = coder.compress_bytes(b"abcdeffgg").unwrap();
/// assert_eq!(coder.decompress_bytes(&encoded).unwrap(), b"abcdeffgg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanCoder {
    config: HuffmanConfig,
}

impl HuffmanCoder {
    /// Create a coder, rejecting configurations that cannot hold a sentinel symbol.
    pub fn new(config: HuffmanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// A coder over byte values.
    pub fn bytes() -> Self {
        Self {
            config: HuffmanConfig::bytes(),
        }
    }

    /// A coder over Unicode scalar values.
    pub fn unicode() -> Self {
        Self {
            config: HuffmanConfig::unicode(),
        }
    }

    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Compress `symbols` into an encoded bit-sequence plus its tree.
    ///
    /// Fails with [`HuffmanError::EmptyInput`] if `symbols` is empty.
    pub fn compress(&self, symbols: &[Symbol]) -> Result<EncodedResult> {
        let freq_table = build_frequency_table(symbols, &self.config)?;
        let tree = build_huffman_tree(&freq_table, &self.config)?;
        let code_table = build_code_table(&tree, &self.config);
        debug!(
            "compressing {} symbols with {} distinct codes",
            symbols.len(),
            code_table.len()
        );
        let bits = encode(symbols, &code_table);
        Ok(EncodedResult::new(bits, tree, self.config))
    }

    /// Reconstruct the original symbols from `result`.
    ///
    /// The placeholder leaf is recognised through the alphabet stored in
    /// `result`, so a result decodes the same whichever coder built it.
    pub fn decompress(&self, result: &EncodedResult) -> Result<Vec<Symbol>> {
        result.decode()
    }

    pub fn compress_bytes(&self, data: &[u8]) -> Result<EncodedResult> {
        let symbols: Vec<Symbol> = data.iter().map(|&b| Symbol::from(b)).collect();
        self.compress(&symbols)
    }

    pub fn decompress_bytes(&self, result: &EncodedResult) -> Result<Vec<u8>> {
        self.decompress(result)?
            .into_iter()
            .map(|symbol| {
                u8::try_from(symbol).map_err(|_| HuffmanError::SymbolOutOfRange { symbol })
            })
            .collect()
    }

    pub fn compress_str(&self, text: &str) -> Result<EncodedResult> {
        let symbols: Vec<Symbol> = text.chars().map(Symbol::from).collect();
        self.compress(&symbols)
    }

    pub fn decompress_str(&self, result: &EncodedResult) -> Result<String> {
        self.decompress(result)?
            .into_iter()
            .map(|symbol| {
                char::from_u32(symbol).ok_or(HuffmanError::SymbolOutOfRange { symbol })
            })
            .collect()
    }
}

impl Default for HuffmanCoder {
    fn default() -> Self {
        Self::bytes()
    }
}

/// Convenience function: compress `input` over the Unicode alphabet,
/// returning the encoded bit string together with its Huffman tree.
pub fn huffman_encode(input: &str) -> Result<EncodedResult> {
    HuffmanCoder::unicode().compress_str(input)
}

/// Convenience function: decode a result produced by [`huffman_encode`].
pub fn huffman_decode(result: &EncodedResult) -> Result<String> {
    HuffmanCoder::unicode().decompress_str(result)
}
