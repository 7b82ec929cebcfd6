//! Input analysis: turning a symbol sequence into occurrence counts.

pub mod frequency;

pub use frequency::FrequencyTable;
