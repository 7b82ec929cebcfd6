// src/utils/error.rs

use thiserror::Error;

/// The error type for all operations in the Huffman encoder library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// The input has too few distinct symbols to build a meaningful prefix code.
    #[error("not enough unique symbols: found {distinct}, need at least {required}")]
    InsufficientAlphabet { distinct: usize, required: usize },

    /// An invalid argument was provided to a function.
    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    /// Symbol counts add up to more than `u64::MAX`.
    #[error("symbol weights overflow a 64-bit total")]
    WeightOverflow,

    /// A symbol was passed to the encoder that has no codeword.
    #[error("symbol is not present in the code table")]
    UnknownSymbol,

    /// The bit stream ended in the middle of a codeword.
    #[error("bit stream ended inside a codeword ({trailing_bits} trailing bits)")]
    TruncatedStream { trailing_bits: usize },
}

/// A specialized `Result` type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
