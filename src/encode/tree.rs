// src/encode/tree.rs

//! Huffman tree construction.
//!
//! The tree is kept in an arena: leaves occupy the first slots (one per
//! distinct symbol, in ascending symbol order) and every merge appends one
//! internal node. Codewords and merge nodes are both read off this arena, so
//! the tree shape never has to be reverse-engineered from the code table.
//!
//! # Tie-break
//!
//! The priority queue is keyed by `(weight, first symbol of the group)`. A
//! merged group lists the lower entry's symbols before the higher entry's, so
//! its first symbol is the lower entry's first symbol. Symbols are distinct,
//! which makes every key unique and the construction fully deterministic.

use crate::analysis::FrequencyTable;
use crate::encode::codeword::Codeword;
use crate::utils::error::{HuffmanError, Result};
use crate::utils::log::{TARGET, debug, trace};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Alphabets with fewer distinct symbols than this are rejected by default.
pub const DEFAULT_MIN_ALPHABET: usize = 3;

#[derive(Debug, Clone)]
enum NodeKind<S> {
    Leaf { symbol: S },
    Internal { children: [usize; 2] },
}

#[derive(Debug, Clone)]
struct Node<S> {
    weight: u64,
    kind: NodeKind<S>,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry<S> {
    weight: u64,
    first: S,
    node: usize,
}

/// An internal node of the tree, other than the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeNode {
    /// Sum of the counts of every symbol below this node.
    pub weight: u64,
    /// Position in the tree; the longest common prefix of the descendants' codewords.
    pub path: Codeword,
}

/// One element of the tree shape, as consumed by tree renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeElement<S> {
    Leaf {
        symbol: S,
        weight: u64,
        codeword: Codeword,
    },
    Merge(MergeNode),
}

impl<S> TreeElement<S> {
    pub fn weight(&self) -> u64 {
        match self {
            TreeElement::Leaf { weight, .. } => *weight,
            TreeElement::Merge(node) => node.weight,
        }
    }

    /// Path from the root to this element.
    pub fn path(&self) -> &Codeword {
        match self {
            TreeElement::Leaf { codeword, .. } => codeword,
            TreeElement::Merge(node) => &node.path,
        }
    }
}

/// A Huffman tree built from a [`FrequencyTable`].
#[derive(Debug, Clone)]
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root: usize,
}

impl<S: Ord + Clone> HuffmanTree<S> {
    /// Builds the tree, rejecting alphabets smaller than [`DEFAULT_MIN_ALPHABET`].
    pub fn build(freq: &FrequencyTable<S>) -> Result<Self> {
        Self::build_with_min_alphabet(freq, DEFAULT_MIN_ALPHABET)
    }

    /// Builds the tree, rejecting alphabets with fewer than `min_alphabet`
    /// distinct symbols. `min_alphabet` must be at least 2.
    pub fn build_with_min_alphabet(freq: &FrequencyTable<S>, min_alphabet: usize) -> Result<Self> {
        if min_alphabet < 2 {
            return Err(HuffmanError::InvalidArg(format!(
                "minimum alphabet size must be at least 2, got {}",
                min_alphabet
            )));
        }
        let distinct = freq.distinct();
        if distinct < min_alphabet {
            debug!(
                target: TARGET,
                "rejecting alphabet of {} symbols (minimum {})", distinct, min_alphabet
            );
            return Err(HuffmanError::InsufficientAlphabet {
                distinct,
                required: min_alphabet,
            });
        }

        let mut nodes = Vec::with_capacity(2 * distinct - 1);
        let mut heap = BinaryHeap::with_capacity(distinct);
        for (symbol, weight) in freq.iter() {
            let node = nodes.len();
            nodes.push(Node {
                weight,
                kind: NodeKind::Leaf {
                    symbol: symbol.clone(),
                },
            });
            heap.push(Reverse(HeapEntry {
                weight,
                first: symbol.clone(),
                node,
            }));
        }

        let root = loop {
            let Some(Reverse(lo)) = heap.pop() else {
                // distinct >= 2, so the heap is never empty here.
                return Err(HuffmanError::InvalidArg("empty frequency table".to_string()));
            };
            let Some(Reverse(hi)) = heap.pop() else {
                break lo.node;
            };

            let weight = lo
                .weight
                .checked_add(hi.weight)
                .ok_or(HuffmanError::WeightOverflow)?;
            let node = nodes.len();
            trace!(
                target: TARGET,
                "merge #{}: {} + {} -> {}", node, lo.weight, hi.weight, weight
            );
            nodes.push(Node {
                weight,
                kind: NodeKind::Internal {
                    children: [lo.node, hi.node],
                },
            });
            heap.push(Reverse(HeapEntry {
                weight,
                first: lo.first,
                node,
            }));
        };

        let tree = HuffmanTree { nodes, root };
        debug!(
            target: TARGET,
            "built huffman tree: {} symbols, total weight {}, depth {}",
            distinct,
            tree.total_weight(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Every `(symbol, codeword)` pair, in no particular order.
    pub(crate) fn leaf_codes(&self) -> Vec<(S, Codeword)> {
        self.walk()
            .into_iter()
            .filter_map(|(idx, path)| match &self.nodes[idx].kind {
                NodeKind::Leaf { symbol } => Some((symbol.clone(), path)),
                NodeKind::Internal { .. } => None,
            })
            .collect()
    }

    /// Internal nodes other than the root, deepest first, then by path.
    pub fn merge_nodes(&self) -> Vec<MergeNode> {
        let mut merges: Vec<MergeNode> = self
            .walk()
            .into_iter()
            .filter(|(idx, _)| *idx != self.root)
            .filter_map(|(idx, path)| match self.nodes[idx].kind {
                NodeKind::Internal { .. } => Some(MergeNode {
                    weight: self.nodes[idx].weight,
                    path,
                }),
                NodeKind::Leaf { .. } => None,
            })
            .collect();
        sort_merge_nodes(&mut merges);
        merges
    }

    /// Leaves in code-table order, followed by the merge nodes.
    pub fn elements(&self) -> Vec<TreeElement<S>> {
        let mut leaves: Vec<(S, Codeword, u64)> = self
            .walk()
            .into_iter()
            .filter_map(|(idx, path)| match &self.nodes[idx].kind {
                NodeKind::Leaf { symbol } => Some((symbol.clone(), path, self.nodes[idx].weight)),
                NodeKind::Internal { .. } => None,
            })
            .collect();
        leaves.sort_by(|a, b| code_order((&a.0, &a.1), (&b.0, &b.1)));

        leaves
            .into_iter()
            .map(|(symbol, codeword, weight)| TreeElement::Leaf {
                symbol,
                weight,
                codeword,
            })
            .chain(self.merge_nodes().into_iter().map(TreeElement::Merge))
            .collect()
    }
}

impl<S> HuffmanTree<S> {
    /// Weight of the root, i.e. the length of the analyzed input.
    pub fn total_weight(&self) -> u64 {
        self.nodes[self.root].weight
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        (self.nodes.len() + 1) / 2
    }

    /// Length of the longest codeword.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            max = max.max(depth);
            if let NodeKind::Internal { children } = self.nodes[idx].kind {
                stack.push((children[0], depth + 1));
                stack.push((children[1], depth + 1));
            }
        }
        max
    }

    /// Visits every node once and returns it with its path from the root.
    fn walk(&self) -> Vec<(usize, Codeword)> {
        let mut visited = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root, Codeword::new())];
        while let Some((idx, path)) = stack.pop() {
            if let NodeKind::Internal { children } = self.nodes[idx].kind {
                stack.push((children[1], path.child(true)));
                stack.push((children[0], path.child(false)));
            }
            visited.push((idx, path));
        }
        visited
    }
}

pub(crate) fn sort_merge_nodes(merges: &mut [MergeNode]) {
    merges.sort_by(|a, b| {
        b.path
            .len()
            .cmp(&a.path.len())
            .then_with(|| a.path.cmp(&b.path))
    });
}

/// Code table order: shorter codewords first, then by symbol, then by codeword.
pub(crate) fn code_order<S: Ord>(a: (&S, &Codeword), b: (&S, &Codeword)) -> Ordering {
    a.1.len()
        .cmp(&b.1.len())
        .then_with(|| a.0.cmp(b.0))
        .then_with(|| a.1.cmp(b.1))
}
