use std::collections::BTreeMap;

use super::{HuffmanConfig, Symbol};
use crate::error::{HuffmanError, Result};

/// Occurrence counts of the symbols seen in an input.
///
/// Only symbols that occur at least once are stored, and iteration runs in
/// ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    /// Count of `symbol`, zero if it never occurred.
    pub fn get(&self, symbol: Symbol) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

/// Build a frequency table for `symbols` in a single pass.
///
/// Fails with [`HuffmanError::EmptyInput`] on an empty slice and with
/// [`HuffmanError::SymbolOutOfAlphabet`] on a symbol outside `config`.
pub fn build_frequency_table(
    symbols: &[Symbol],
    config: &HuffmanConfig,
) -> Result<FrequencyTable> {
    if symbols.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let mut counts = BTreeMap::new();
    for &symbol in symbols {
        if !config.contains(symbol) {
            return Err(HuffmanError::SymbolOutOfAlphabet {
                symbol,
                alphabet_size: config.alphabet_size,
            });
        }
        *counts.entry(symbol).or_insert(0) += 1;
    }
    Ok(FrequencyTable { counts })
}
