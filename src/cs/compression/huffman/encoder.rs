use bitvec::prelude::*;
use log::debug;

use super::{decode, CodeTable, HuffmanConfig, HuffmanNode, Symbol};
use crate::error::{HuffmanError, Result};

/// The output of compression: the encoded bits, the tree needed to decode
/// them, and the alphabet the tree was built over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResult {
    /// Concatenated codes as '0' and '1' characters.
    pub bits: String,
    /// The tree the codes were derived from.
    pub tree: HuffmanNode,
    /// Alphabet of the tree; its sentinel marks the placeholder leaf.
    pub config: HuffmanConfig,
}

impl EncodedResult {
    pub fn new(bits: String, tree: HuffmanNode, config: HuffmanConfig) -> Self {
        Self { bits, tree, config }
    }

    /// Decode the bits against the tree, using the stored alphabet.
    pub fn decode(&self) -> Result<Vec<Symbol>> {
        decode(&self.bits, &self.tree, &self.config)
    }

    /// Number of encoded bits.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Pack the bit-sequence into bytes, most significant bit first.
    ///
    /// Fails with [`HuffmanError::InvalidBit`] if `bits` holds anything other
    /// than '0' and '1'.
    pub fn to_bitvec(&self) -> Result<BitVec<u8, Msb0>> {
        let mut packed = BitVec::with_capacity(self.bits.len());
        for (position, bit) in self.bits.chars().enumerate() {
            match bit {
                '0' => packed.push(false),
                '1' => packed.push(true),
                _ => return Err(HuffmanError::InvalidBit { bit, position }),
            }
        }
        packed.set_uninitialized(false);
        Ok(packed)
    }

    /// Rebuild a result from packed bits and the tree that produced them.
    pub fn from_bitvec(
        packed: &BitSlice<u8, Msb0>,
        tree: HuffmanNode,
        config: HuffmanConfig,
    ) -> Self {
        let bits = packed
            .iter()
            .by_vals()
            .map(|bit| if bit { '1' } else { '0' })
            .collect();
        Self { bits, tree, config }
    }

    /// The packed payload as lowercase hex. The last byte is zero-padded.
    pub fn to_hex(&self) -> Result<String> {
        Ok(hex::encode(self.to_bitvec()?.as_raw_slice()))
    }
}

/// Encode `symbols` using the provided code table.
/// Each symbol is replaced with its Huffman code.
///
/// # Panics
///
/// If a symbol has no code. A table built from the same input always covers it.
pub fn encode(symbols: &[Symbol], code_table: &CodeTable) -> String {
    let mut bits = String::new();
    for &symbol in symbols {
        match code_table.get(symbol) {
            Some(code) => bits.push_str(code),
            None => panic!(
                "symbol {} missing from code table built for this input",
                symbol
            ),
        }
    }
    debug!("encoded {} symbols into {} bits", symbols.len(), bits.len());
    bits
}
