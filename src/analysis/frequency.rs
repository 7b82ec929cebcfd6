// src/analysis/frequency.rs

//! Symbol frequency counting.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::utils::error::{HuffmanError, Result};

/// Occurrence counts for every distinct symbol of an input.
///
/// Counts are always strictly positive and their sum equals the number of
/// symbols that were analyzed. Iteration is in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Ord> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<S: Ord + Clone> FrequencyTable<S> {
    /// Counts every symbol of `input`.
    pub fn analyze<I>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self::default();
        for symbol in input {
            // One per item, so the total never passes the input length.
            *table.counts.entry(symbol).or_insert(0) += 1;
            table.total += 1;
        }
        table
    }

    /// Builds a table from explicit `(symbol, count)` pairs.
    ///
    /// Zero counts are skipped and repeated symbols are summed. Fails with
    /// [`HuffmanError::WeightOverflow`] if the total does not fit in a `u64`.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut table = Self::default();
        for (symbol, count) in counts {
            if count > 0 {
                table.add(symbol, count)?;
            }
        }
        Ok(table)
    }

    fn add(&mut self, symbol: S, count: u64) -> Result<()> {
        // Every count is bounded by the total, so checking the total is enough.
        self.total = self
            .total
            .checked_add(count)
            .ok_or(HuffmanError::WeightOverflow)?;
        *self.counts.entry(symbol).or_insert(0) += count;
        Ok(())
    }

    /// Merges the counts of `other` into this table.
    ///
    /// On [`HuffmanError::WeightOverflow`] the table keeps the counts merged
    /// before the failing symbol.
    pub fn merge(&mut self, other: FrequencyTable<S>) -> Result<()> {
        for (symbol, count) in other.counts {
            self.add(symbol, count)?;
        }
        Ok(())
    }

    /// Returns the count of `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Sum of all counts, i.e. the length of the analyzed input.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.counts.contains_key(symbol)
    }

    /// Iterates over `(symbol, count)` in ascending symbol order.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

impl FrequencyTable<char> {
    /// Counts the characters of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::analyze(text.chars())
    }
}

impl FrequencyTable<u8> {
    /// Counts the bytes of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::analyze(data.iter().copied())
    }
}

#[cfg(feature = "rayon")]
impl<S: Ord + Clone + Send + Sync> FrequencyTable<S> {
    /// Counts `input` in parallel chunks and merges the partial tables.
    ///
    /// The result is identical to [`FrequencyTable::analyze`].
    pub fn analyze_par(input: &[S]) -> Self {
        use rayon::prelude::*;

        const CHUNK: usize = 64 * 1024;

        input
            .par_chunks(CHUNK)
            .map(|chunk| Self::analyze(chunk.iter().cloned()))
            .reduce(Self::default, |mut acc, part| {
                // Partial totals sum to `input.len()`, which fits in a u64.
                for (symbol, count) in part.counts {
                    *acc.counts.entry(symbol).or_insert(0) += count;
                    acc.total += count;
                }
                acc
            })
    }
}

/// Iterator over the entries of a [`FrequencyTable`].
pub struct Iter<'a, S> {
    inner: btree_map::Iter<'a, S, u64>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (&'a S, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(s, &c)| (s, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> ExactSizeIterator for Iter<'_, S> {}

impl<'a, S: Ord + Clone> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, u64);
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.iter()
    }
}

impl<S: Ord + Clone> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::analyze(iter)
    }
}
