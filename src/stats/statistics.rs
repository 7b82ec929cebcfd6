// src/stats/statistics.rs

//! Code quality statistics.

use crate::analysis::FrequencyTable;
use crate::encode::codeword::Codeword;
use crate::encode::huffman::CodeTable;
use crate::utils::error::{HuffmanError, Result};

/// One row of the statistics table.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolStatistics<S> {
    pub symbol: S,
    /// Occurrence count.
    pub weight: u64,
    /// Share of the input, in percent.
    pub probability: f64,
    pub codeword: Codeword,
}

/// Snapshot of how well a code table fits the frequencies it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<S> {
    rows: Vec<SymbolStatistics<S>>,
    total_weight: u64,
    expected_length: f64,
    entropy: f64,
}

impl<S: Ord + Clone> Statistics<S> {
    /// Computes the statistics of `codes` under the distribution `freq`.
    ///
    /// Both tables must cover the same symbols.
    pub fn compute(freq: &FrequencyTable<S>, codes: &CodeTable<S>) -> Result<Self> {
        if freq.total() == 0 {
            return Err(HuffmanError::InvalidArg("empty frequency table".to_string()));
        }
        if freq.distinct() != codes.len() {
            return Err(HuffmanError::InvalidArg(format!(
                "frequency table has {} symbols but code table has {}",
                freq.distinct(),
                codes.len()
            )));
        }

        let total = freq.total() as f64;
        let mut rows = Vec::with_capacity(codes.len());
        for (symbol, codeword) in codes.iter() {
            let weight = freq.get(symbol).ok_or_else(|| {
                HuffmanError::InvalidArg("code table symbol missing from frequency table".to_string())
            })?;
            rows.push(SymbolStatistics {
                symbol: symbol.clone(),
                weight,
                probability: weight as f64 / total * 100.0,
                codeword: codeword.clone(),
            });
        }

        let expected_length: f64 = rows
            .iter()
            .map(|r| r.probability / 100.0 * r.codeword.len() as f64)
            .sum();
        let entropy = shannon_entropy(rows.iter().map(|r| r.weight as f64 / total));

        Ok(Statistics {
            rows,
            total_weight: freq.total(),
            expected_length,
            entropy,
        })
    }
}

impl<S> Statistics<S> {
    /// Per-symbol rows, in code table order.
    pub fn rows(&self) -> &[SymbolStatistics<S>] {
        &self.rows
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Probability-weighted average codeword length, in bits/symbol.
    pub fn expected_length(&self) -> f64 {
        self.expected_length
    }

    /// Shannon entropy of the source, in bits/symbol.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Entropy divided by expected length; 1.0 for a perfect code.
    pub fn efficiency(&self) -> f64 {
        if self.expected_length == 0.0 {
            return 0.0;
        }
        self.entropy / self.expected_length
    }

    /// Expected length minus entropy, in bits/symbol.
    pub fn redundancy(&self) -> f64 {
        self.expected_length - self.entropy
    }

    /// Number of bits needed to encode the whole input.
    ///
    /// Counted in `u128`, which holds a `u64` total weight times any codeword
    /// length.
    pub fn encoded_bits(&self) -> u128 {
        self.rows
            .iter()
            .map(|r| u128::from(r.weight) * r.codeword.len() as u128)
            .sum()
    }
}

/// Base-2 entropy of a distribution given as fractions summing to 1.
///
/// Zero entries contribute nothing (`0 * log2(0) = 0`).
pub fn shannon_entropy<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    probabilities
        .into_iter()
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}
