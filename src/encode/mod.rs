// src/encode/mod.rs

//! Huffman code construction.
//!
//! ## Module Map
//!
//! - `tree` - arena-based tree builder, merge nodes and tree elements
//! - `huffman` - sorted code tables and `build_code`
//! - `codeword` - bit-level codeword type
//! - `bitstream` - packing and unpacking symbol sequences

pub mod bitstream;
pub mod codeword;
pub mod huffman;
pub mod tree;

pub use codeword::Codeword;
pub use huffman::{CodeTable, build_code};
pub use tree::{DEFAULT_MIN_ALPHABET, HuffmanTree, MergeNode, TreeElement};
