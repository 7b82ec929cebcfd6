//! One-call encoding pipeline and its configuration.

pub mod builder;
pub mod params;

pub use builder::{Encoding, HuffmanCoder};
pub use params::CoderParams;
