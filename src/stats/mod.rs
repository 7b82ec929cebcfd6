//! Statistics over a finished code: probabilities, expected length, entropy.

pub mod report;
pub mod statistics;

pub use report::{CodeTableReport, symbol_label};
pub use statistics::{Statistics, SymbolStatistics, shannon_entropy};
