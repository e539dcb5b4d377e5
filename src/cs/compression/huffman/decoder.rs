use log::debug;

use super::{HuffmanConfig, HuffmanNode, Symbol};
use crate::error::{HuffmanError, Result};

/// Decode an encoded bit string using the Huffman tree.
///
/// Starting at the root, each '0' descends left and each '1' descends right.
/// Reaching a leaf emits its symbol and resets to the root.
///
/// # Errors
///
/// - [`HuffmanError::InvalidBit`] on any character other than '0' or '1'.
/// - [`HuffmanError::IncompleteCode`] if the bits run out between root and leaf.
/// - [`HuffmanError::SentinelReached`] if a code leads to the sentinel leaf of `config`.
pub fn decode(bits: &str, tree: &HuffmanNode, config: &HuffmanConfig) -> Result<Vec<Symbol>> {
    // A hand-built tree may be a lone leaf; each '0' then stands for one occurrence.
    if let HuffmanNode::Leaf { symbol, .. } = tree {
        return decode_lone_leaf(bits, *symbol, config);
    }

    let mut result = Vec::new();
    let mut current = tree;

    for (position, bit) in bits.chars().enumerate() {
        current = match (current, bit) {
            (HuffmanNode::Internal { left, .. }, '0') => &**left,
            (HuffmanNode::Internal { right, .. }, '1') => &**right,
            _ => return Err(HuffmanError::InvalidBit { bit, position }),
        };
        if let HuffmanNode::Leaf { symbol, .. } = current {
            if !config.contains(*symbol) {
                return Err(HuffmanError::SentinelReached {
                    position: position + 1,
                });
            }
            result.push(*symbol);
            current = tree;
        }
    }

    if !std::ptr::eq(current, tree) {
        return Err(HuffmanError::IncompleteCode {
            position: bits.chars().count(),
        });
    }

    debug!("decoded {} symbols from {} bits", result.len(), bits.len());
    Ok(result)
}

fn decode_lone_leaf(bits: &str, symbol: Symbol, config: &HuffmanConfig) -> Result<Vec<Symbol>> {
    let mut result = Vec::with_capacity(bits.len());
    for (position, bit) in bits.chars().enumerate() {
        if bit != '0' {
            return Err(HuffmanError::InvalidBit { bit, position });
        }
        if !config.contains(symbol) {
            return Err(HuffmanError::SentinelReached {
                position: position + 1,
            });
        }
        result.push(symbol);
    }
    Ok(result)
}
