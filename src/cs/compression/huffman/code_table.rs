use std::collections::BTreeMap;

use super::{HuffmanConfig, HuffmanNode, Symbol};

/// Maps each symbol to its Huffman code, a string of '0' and '1'.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, String>,
}

impl CodeTable {
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// True if no code is a prefix of another.
    ///
    /// Sorting puts any code directly before the codes it prefixes, so only
    /// neighbours need comparing.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

/// Build the code table mapping symbols to their Huffman codes.
///
/// Walks the tree with an explicit stack, appending '0' for a left edge and
/// '1' for a right edge. The sentinel leaf of `config` gets no entry.
pub fn build_code_table(root: &HuffmanNode, config: &HuffmanConfig) -> CodeTable {
    let mut codes = BTreeMap::new();
    let mut stack = vec![(root, String::new())];

    while let Some((node, prefix)) = stack.pop() {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                if !config.contains(*symbol) {
                    continue;
                }
                // A lone root leaf has an empty path; only hand-built trees get here.
                let code = if prefix.is_empty() {
                    "0".to_string()
                } else {
                    prefix
                };
                codes.insert(*symbol, code);
            }
            HuffmanNode::Internal { left, right, .. } => {
                let mut right_prefix = prefix.clone();
                right_prefix.push('1');
                stack.push((right, right_prefix));
                let mut left_prefix = prefix;
                left_prefix.push('0');
                stack.push((left, left_prefix));
            }
        }
    }

    CodeTable { codes }
}
