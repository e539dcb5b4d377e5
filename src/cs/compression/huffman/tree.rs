use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::{FrequencyTable, HuffmanConfig, Symbol};
use crate::error::{HuffmanError, Result};

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node holds one symbol and its weight.
    Leaf { symbol: Symbol, weight: usize },
    /// An internal node owns exactly two children; its weight is their sum.
    Internal {
        weight: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Merge two subtrees under a new internal node.
    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns the weight of the node.
    pub fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// `(symbol, weight)` of every leaf, left to right.
    pub fn leaves(&self) -> Vec<(Symbol, usize)> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, weight } => leaves.push((*symbol, *weight)),
                HuffmanNode::Internal { left, right, .. } => {
                    // Right first so the left subtree is visited first.
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        leaves
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => max_depth = max_depth.max(depth),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        max_depth
    }
}

/// Heap entry ordered by `(weight, is_leaf, key)` ascending: among equal
/// weights internal nodes pop before leaves, then the smallest `key` wins,
/// where `key` is the smallest symbol in the subtree. Subtrees are disjoint,
/// so keys are unique and the order is total.
#[derive(Debug)]
struct HeapEntry {
    key: Symbol,
    node: HuffmanNode,
}

impl HeapEntry {
    fn rank(&self) -> (usize, bool, Symbol) {
        (self.node.weight(), self.node.is_leaf(), self.key)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: BinaryHeap is a max-heap and the lightest node must pop first.
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree given a frequency table.
///
/// Nodes are merged lightest first. Equal weights pop merged subtrees before
/// leaves, then by smallest symbol value, so equal inputs always give equal
/// trees. With a single distinct symbol a
/// zero-weight leaf holding [`HuffmanConfig::sentinel`] is added so the root
/// is always internal and every real symbol gets a non-empty code.
pub fn build_huffman_tree(
    freq_table: &FrequencyTable,
    config: &HuffmanConfig,
) -> Result<HuffmanNode> {
    config.validate()?;

    let mut heap: BinaryHeap<HeapEntry> = freq_table
        .iter()
        .filter(|&(_, weight)| weight > 0)
        .map(|(symbol, weight)| HeapEntry {
            key: symbol,
            node: HuffmanNode::Leaf { symbol, weight },
        })
        .collect();

    if heap.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }
    let leaf_count = heap.len();
    if leaf_count == 1 {
        let sentinel = config.sentinel();
        trace!("single distinct symbol, adding sentinel leaf {}", sentinel);
        heap.push(HeapEntry {
            key: sentinel,
            node: HuffmanNode::Leaf {
                symbol: sentinel,
                weight: 0,
            },
        });
    }

    // Combine nodes until only one tree remains.
    while heap.len() > 1 {
        let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
            break;
        };
        trace!("merging {:?} and {:?}", left.rank(), right.rank());
        // Internal nodes are keyed by their smallest symbol for the tie-break.
        heap.push(HeapEntry {
            key: left.key.min(right.key),
            node: HuffmanNode::merge(left.node, right.node),
        });
    }

    let root = heap
        .pop()
        .map(|entry| entry.node)
        .ok_or(HuffmanError::EmptyInput)?;
    debug!(
        "built huffman tree: {} leaves, weight {}, depth {}",
        leaf_count,
        root.weight(),
        root.depth()
    );
    Ok(root)
}
