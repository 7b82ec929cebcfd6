// src/encode/bitstream.rs

//! Packing symbol sequences into bits with a [`CodeTable`].
//!
//! Bits are stored MSB-first: the first codeword bit of the first symbol is
//! the high bit of the first byte. The last byte is zero-padded by the
//! underlying `BitVec`, but its length is tracked exactly.

use crate::encode::huffman::CodeTable;
use crate::utils::error::{HuffmanError, Result};
use bitvec::order::Msb0;
use bitvec::prelude::*;

/// Binary trie over the codewords of a table, used for decoding.
enum TrieNode {
    Branch([Option<usize>; 2]),
    Leaf(usize),
}

struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl DecodeTrie {
    const ROOT: usize = 0;

    fn build<S>(table: &CodeTable<S>) -> Result<Self> {
        let mut nodes = vec![TrieNode::Branch([None, None])];
        for (entry, (_, codeword)) in table.entries().iter().enumerate() {
            let mut cur = Self::ROOT;
            for bit in codeword.bits() {
                let next = match &nodes[cur] {
                    TrieNode::Branch(children) => children[bit as usize],
                    TrieNode::Leaf(_) => {
                        return Err(HuffmanError::InvalidArg(format!(
                            "codeword {} extends another codeword",
                            codeword
                        )));
                    }
                };
                cur = match next {
                    Some(idx) => idx,
                    None => {
                        let idx = nodes.len();
                        nodes.push(TrieNode::Branch([None, None]));
                        if let TrieNode::Branch(children) = &mut nodes[cur] {
                            children[bit as usize] = Some(idx);
                        }
                        idx
                    }
                };
            }
            let fresh = cur != Self::ROOT && matches!(nodes[cur], TrieNode::Branch([None, None]));
            if !fresh {
                return Err(HuffmanError::InvalidArg(format!(
                    "codeword {} is a prefix of another codeword",
                    codeword
                )));
            }
            nodes[cur] = TrieNode::Leaf(entry);
        }
        Ok(DecodeTrie { nodes })
    }
}

impl<S: Ord + Clone> CodeTable<S> {
    /// Appends the codewords of `input` to `out`.
    pub fn encode_into(&self, input: &[S], out: &mut BitVec<u8, Msb0>) -> Result<()> {
        for symbol in input {
            let codeword = self.get(symbol).ok_or(HuffmanError::UnknownSymbol)?;
            out.extend_from_bitslice(codeword.as_bitslice());
        }
        Ok(())
    }

    /// Encodes `input` into a new bit vector.
    pub fn encode(&self, input: &[S]) -> Result<BitVec<u8, Msb0>> {
        let bit_len: usize = input
            .iter()
            .map(|s| self.get(s).map_or(0, |cw| cw.len()))
            .sum();
        let mut out = BitVec::with_capacity(bit_len);
        self.encode_into(input, &mut out)?;
        Ok(out)
    }

    /// Decodes a bit sequence produced by [`CodeTable::encode`].
    pub fn decode(&self, bits: &BitSlice<u8, Msb0>) -> Result<Vec<S>> {
        let trie = DecodeTrie::build(self)?;
        let entries = self.entries();

        let mut out = Vec::new();
        let mut cur = DecodeTrie::ROOT;
        let mut pending = 0usize;
        for bit in bits.iter().by_vals() {
            let next = match &trie.nodes[cur] {
                TrieNode::Branch(children) => children[bit as usize],
                TrieNode::Leaf(_) => None,
            };
            let Some(next) = next else {
                return Err(HuffmanError::InvalidArg(
                    "bit pattern does not match any codeword".to_string(),
                ));
            };
            pending += 1;
            cur = next;
            if let TrieNode::Leaf(entry) = trie.nodes[cur] {
                out.push(entries[entry].0.clone());
                cur = DecodeTrie::ROOT;
                pending = 0;
            }
        }

        if pending > 0 {
            return Err(HuffmanError::TruncatedStream {
                trailing_bits: pending,
            });
        }
        Ok(out)
    }
}
