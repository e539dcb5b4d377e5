use super::{EncodedResult, HuffmanConfig};

/// Size accounting for one compression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of symbols that were compressed.
    pub symbol_count: usize,
    /// Size of the input stored with a fixed width per symbol.
    pub original_bits: usize,
    /// Length of the encoded bit-sequence.
    pub encoded_bits: usize,
}

impl CompressionStats {
    /// Stats for `symbol_count` symbols of `config` encoded into `encoded_bits` bits.
    pub fn new(symbol_count: usize, encoded_bits: usize, config: &HuffmanConfig) -> Self {
        Self {
            symbol_count,
            original_bits: symbol_count * config.fixed_width_bits() as usize,
            encoded_bits,
        }
    }

    /// Encoded size over original size. Zero for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.original_bits as f64
    }

    /// Percentage of the original size saved by encoding.
    pub fn space_savings(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.ratio())
    }

    /// Average code length in bits per symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbol_count == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.symbol_count as f64
    }
}

impl EncodedResult {
    /// Size accounting against a fixed-width encoding of the input.
    ///
    /// The root weight is the input length; the placeholder leaf weighs nothing.
    pub fn stats(&self) -> CompressionStats {
        CompressionStats::new(self.tree.weight(), self.bit_len(), &self.config)
    }
}
