//! Public builder API for running a complete encoding.
//!
//! # Examples
//!
//! ```
//! use huffman_encoder::HuffmanCoder;
//!
//! let encoding = HuffmanCoder::new().encode_text("aaabbbcc")?;
//! let stats = encoding.statistics()?;
//! assert!((stats.expected_length() - 1.625).abs() < 1e-9);
//! assert!(stats.expected_length() >= stats.entropy());
//! # Ok::<(), huffman_encoder::HuffmanError>(())
//! ```

use crate::analysis::FrequencyTable;
use crate::coder::params::CoderParams;
use crate::encode::huffman::CodeTable;
use crate::encode::tree::{HuffmanTree, MergeNode, TreeElement};
use crate::stats::statistics::Statistics;
use crate::utils::error::Result;
use bitvec::order::Msb0;
use bitvec::vec::BitVec;

// ============================================================================
// Builder
// ============================================================================

/// Runs analyze, build and statistics in one call.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCoder {
    params: CoderParams,
}

impl HuffmanCoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(mut self, params: CoderParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the fewest distinct symbols accepted.
    pub fn with_min_alphabet(mut self, min_alphabet: usize) -> Self {
        self.params.min_alphabet = min_alphabet;
        self
    }

    pub fn params(&self) -> &CoderParams {
        &self.params
    }

    /// Analyzes `input` and builds its code.
    pub fn encode<S, I>(&self, input: I) -> Result<Encoding<S>>
    where
        S: Ord + Clone,
        I: IntoIterator<Item = S>,
    {
        self.encode_frequencies(FrequencyTable::analyze(input))
    }

    /// Analyzes the characters of `text` and builds their code.
    pub fn encode_text(&self, text: &str) -> Result<Encoding<char>> {
        self.encode(text.chars())
    }

    /// Builds the code for already counted frequencies.
    pub fn encode_frequencies<S: Ord + Clone>(&self, frequencies: FrequencyTable<S>) -> Result<Encoding<S>> {
        self.params.validate()?;
        let tree = HuffmanTree::build_with_min_alphabet(&frequencies, self.params.min_alphabet)?;
        let codes = CodeTable::from_tree(&tree);
        Ok(Encoding {
            frequencies,
            tree,
            codes,
        })
    }
}

// ============================================================================
// Result
// ============================================================================

/// The outcome of one encoding run.
#[derive(Debug, Clone)]
pub struct Encoding<S> {
    frequencies: FrequencyTable<S>,
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Ord + Clone> Encoding<S> {
    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn statistics(&self) -> Result<Statistics<S>> {
        Statistics::compute(&self.frequencies, &self.codes)
    }

    /// Internal nodes of the tree, computed on request.
    pub fn merge_nodes(&self) -> Vec<MergeNode> {
        self.tree.merge_nodes()
    }

    /// Leaves and merge nodes, for tree renderers.
    pub fn elements(&self) -> Vec<TreeElement<S>> {
        self.tree.elements()
    }

    /// Packs `input` with this encoding's code table.
    pub fn encode_input(&self, input: &[S]) -> Result<BitVec<u8, Msb0>> {
        self.codes.encode(input)
    }

    /// Splits the encoding into its frequency and code tables.
    pub fn into_parts(self) -> (FrequencyTable<S>, CodeTable<S>) {
        (self.frequencies, self.codes)
    }
}
