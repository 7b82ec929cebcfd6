// src/coder/params.rs

use crate::encode::tree::DEFAULT_MIN_ALPHABET;
use crate::utils::error::{HuffmanError, Result};

/// Configuration for a [`HuffmanCoder`](crate::coder::HuffmanCoder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoderParams {
    /// Fewest distinct symbols accepted (default: 3). Must be at least 2.
    pub min_alphabet: usize,
}

impl Default for CoderParams {
    fn default() -> Self {
        Self {
            min_alphabet: DEFAULT_MIN_ALPHABET,
        }
    }
}

impl CoderParams {
    /// Checks that the parameters can produce a code.
    pub fn validate(&self) -> Result<()> {
        if self.min_alphabet < 2 {
            return Err(HuffmanError::InvalidArg(format!(
                "min_alphabet must be at least 2, got {}",
                self.min_alphabet
            )));
        }
        Ok(())
    }
}
