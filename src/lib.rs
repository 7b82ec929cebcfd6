//! A Rust library for building Huffman codes and evaluating them.
//!
//! This crate computes an optimal prefix-free binary code for a sequence of
//! symbols, and the statistics needed to judge it: symbol frequencies,
//! per-symbol probability, expected code length and source entropy.
//!
//! # Quick Start
//!
//! ```
//! use huffman_encoder::{FrequencyTable, Statistics, build_code};
//!
//! let freq = FrequencyTable::from_text("aaabbbcc");
//! let (codes, merges) = build_code(&freq)?;
//! let stats = Statistics::compute(&freq, &codes)?;
//!
//! assert_eq!(codes.get(&'b').map(|c| c.to_string()), Some("0".to_string()));
//! assert_eq!(merges.len(), 1);
//! assert!(stats.expected_length() >= stats.entropy());
//! println!("{}", stats);
//! # Ok::<(), huffman_encoder::HuffmanError>(())
//! ```
//!
//! # Pipeline
//!
//! - **Frequency analysis** (`analysis`): input → [`FrequencyTable`]
//! - **Code construction** (`encode`): frequencies → [`HuffmanTree`],
//!   [`CodeTable`] and [`MergeNode`]s
//! - **Statistics** (`stats`): frequencies + codes → [`Statistics`]
//! - **Builder** (`coder`): [`HuffmanCoder`] runs the three steps at once
//!
//! Alphabets with fewer than three distinct symbols are rejected with
//! [`HuffmanError::InsufficientAlphabet`].
//!
//! # Features
//!
//! - **Generic symbols**: any `Ord + Clone` type (`char`, `u8`, ...)
//! - **Deterministic output**: equal weights are broken by symbol order
//! - **Optional parallelism**: enable the `rayon` feature for parallel
//!   frequency counting

// Core modules
pub mod analysis;
pub mod coder;
pub mod encode;
pub mod stats;
pub mod utils;

// Public builder API
pub use coder::{CoderParams, Encoding, HuffmanCoder};

// Core types
pub use analysis::FrequencyTable;
pub use encode::{CodeTable, Codeword, HuffmanTree, MergeNode, TreeElement, build_code};
pub use stats::{Statistics, SymbolStatistics};

// Error types
pub use utils::error::{HuffmanError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_pipeline() -> Result<()> {
        let freq = FrequencyTable::from_text("this is an example of a huffman tree");
        let (codes, merges) = build_code(&freq)?;
        let stats = Statistics::compute(&freq, &codes)?;

        assert_eq!(codes.len(), freq.distinct());
        assert_eq!(merges.len(), freq.distinct() - 2);
        assert_eq!(stats.rows().len(), codes.len());
        assert_eq!(stats.total_weight(), 36);
        Ok(())
    }

    #[test]
    fn test_builder_matches_free_functions() -> Result<()> {
        let encoding = HuffmanCoder::new().encode_text("abracadabra")?;
        let freq = FrequencyTable::from_text("abracadabra");
        let (codes, merges) = build_code(&freq)?;

        assert_eq!(encoding.codes(), &codes);
        assert_eq!(encoding.merge_nodes(), merges);
        Ok(())
    }
}
