use super::Symbol;
use crate::error::{HuffmanError, Result};

/// Number of distinct byte values.
pub const BYTE_ALPHABET_SIZE: u32 = 256;

/// One past the largest Unicode scalar value.
pub const UNICODE_ALPHABET_SIZE: u32 = 0x11_0000;

/// Configuration options for Huffman coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Number of symbols in the alphabet. Valid symbols are `0..alphabet_size`.
    pub alphabet_size: u32,
}

impl HuffmanConfig {
    /// Create a config for an alphabet of `alphabet_size` symbols.
    pub fn new(alphabet_size: u32) -> Self {
        Self { alphabet_size }
    }

    /// Byte streams: symbols `0..256`.
    pub fn bytes() -> Self {
        Self::new(BYTE_ALPHABET_SIZE)
    }

    /// Text: every Unicode scalar value is a symbol.
    pub fn unicode() -> Self {
        Self::new(UNICODE_ALPHABET_SIZE)
    }

    /// Check that the alphabet is non-empty and leaves room for the sentinel symbol.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet_size == 0 {
            return Err(HuffmanError::InvalidConfig(
                "alphabet size must be at least 1".to_string(),
            ));
        }
        if self.alphabet_size == u32::MAX {
            return Err(HuffmanError::InvalidConfig(format!(
                "alphabet size must be below {} to reserve a sentinel symbol",
                u32::MAX
            )));
        }
        Ok(())
    }

    /// The out-of-alphabet symbol used for the placeholder leaf.
    pub fn sentinel(&self) -> Symbol {
        self.alphabet_size
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: Symbol) -> bool {
        symbol < self.alphabet_size
    }

    /// Bits needed to store one symbol with a fixed-width code.
    pub fn fixed_width_bits(&self) -> u32 {
        match self.alphabet_size {
            0 | 1 => 1,
            n => u32::BITS - (n - 1).leading_zeros(),
        }
    }
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self::bytes()
    }
}
