// src/encode/huffman.rs

//! Huffman code tables.
//!
//! [`build_code`] turns a [`FrequencyTable`] into a [`CodeTable`] and the list
//! of merge nodes. The table is sorted by codeword length, then by symbol,
//! then by codeword, so repeated runs print identical output.

use crate::analysis::FrequencyTable;
use crate::encode::codeword::Codeword;
use crate::encode::tree::{HuffmanTree, MergeNode, code_order, sort_merge_nodes};
use crate::utils::error::{HuffmanError, Result};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// A prefix-free mapping from symbols to codewords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    entries: Vec<(S, Codeword)>,
    index: BTreeMap<S, usize>,
}

/// Builds the optimal prefix code for `freq` together with its merge nodes.
///
/// Fails with [`HuffmanError::InsufficientAlphabet`] when `freq` has fewer
/// than three distinct symbols.
pub fn build_code<S: Ord + Clone>(freq: &FrequencyTable<S>) -> Result<(CodeTable<S>, Vec<MergeNode>)> {
    let tree = HuffmanTree::build(freq)?;
    Ok((CodeTable::from_tree(&tree), tree.merge_nodes()))
}

impl<S: Ord + Clone> CodeTable<S> {
    /// Reads the codewords off a built tree.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        Self::from_sorted(tree.leaf_codes())
    }

    /// Creates a table from explicit entries.
    ///
    /// Codewords must be non-empty, unique and prefix-free, and each symbol
    /// may appear only once.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Codeword)>,
    {
        let entries: Vec<(S, Codeword)> = entries.into_iter().collect();
        if entries.iter().any(|(_, cw)| cw.is_empty()) {
            return Err(HuffmanError::InvalidArg("empty codeword".to_string()));
        }
        let table = Self::from_sorted(entries);
        if table.index.len() != table.entries.len() {
            return Err(HuffmanError::InvalidArg("duplicate symbol in code table".to_string()));
        }
        if !table.is_prefix_free() {
            return Err(HuffmanError::InvalidArg("code table is not prefix-free".to_string()));
        }
        Ok(table)
    }

    fn from_sorted(mut entries: Vec<(S, Codeword)>) -> Self {
        entries.sort_by(|a, b| code_order((&a.0, &a.1), (&b.0, &b.1)));
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (symbol, _))| (symbol.clone(), i))
            .collect();
        CodeTable { entries, index }
    }

    /// Returns the codeword of `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&Codeword> {
        self.index.get(symbol).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    /// True if no codeword is a prefix of another (and none repeats).
    pub fn is_prefix_free(&self) -> bool {
        let mut words: Vec<&Codeword> = self.entries.iter().map(|(_, cw)| cw).collect();
        words.sort();
        // In lexicographic order a prefix sorts directly before one of its extensions.
        words.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Re-derives the merge nodes from the flat codewords.
    ///
    /// Starting from the longest codeword, sibling entries (same prefix,
    /// different last bit) are joined into a node whose path is the shared
    /// prefix and whose weight is the sum of both, until only the two
    /// children of the root remain. Yields the same nodes as
    /// [`HuffmanTree::merge_nodes`] for a table built from `freq`.
    pub fn reconstruct_merges(&self, freq: &FrequencyTable<S>) -> Result<Vec<MergeNode>> {
        let mut frontier: BTreeMap<(usize, Codeword), u64> = BTreeMap::new();
        for (symbol, codeword) in &self.entries {
            let weight = freq.get(symbol).ok_or_else(|| {
                HuffmanError::InvalidArg("code table symbol missing from frequency table".to_string())
            })?;
            frontier.insert((codeword.len(), codeword.clone()), weight);
        }

        let mut merges = Vec::with_capacity(self.entries.len().saturating_sub(2));
        while frontier.len() > 2 {
            let Some(((len, deepest), weight)) = frontier.pop_last() else {
                break;
            };
            let (Some(sibling), Some(path)) = (deepest.sibling(), deepest.parent()) else {
                return Err(HuffmanError::InvalidArg("code table is not a full tree".to_string()));
            };
            let Some(sibling_weight) = frontier.remove(&(len, sibling)) else {
                return Err(HuffmanError::InvalidArg(format!(
                    "codeword {} has no sibling",
                    deepest
                )));
            };

            let weight = weight
                .checked_add(sibling_weight)
                .ok_or(HuffmanError::WeightOverflow)?;
            match frontier.entry((path.len(), path.clone())) {
                Entry::Vacant(slot) => {
                    slot.insert(weight);
                }
                Entry::Occupied(_) => {
                    return Err(HuffmanError::InvalidArg(format!(
                        "codeword {} is a prefix of another codeword",
                        path
                    )));
                }
            }
            merges.push(MergeNode { weight, path });
        }

        sort_merge_nodes(&mut merges);
        Ok(merges)
    }
}

impl<S> CodeTable<S> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest codeword.
    pub fn max_len(&self) -> usize {
        self.entries.iter().map(|(_, cw)| cw.len()).max().unwrap_or(0)
    }

    /// Iterates over `(symbol, codeword)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Codeword)> + '_ {
        self.entries.iter().map(|(s, cw)| (s, cw))
    }

    pub(crate) fn entries(&self) -> &[(S, Codeword)] {
        &self.entries
    }
}
