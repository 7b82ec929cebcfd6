// src/encode/codeword.rs

//! Variable-length binary codewords.

use crate::utils::error::{HuffmanError, Result};
use bitvec::order::Msb0;
use bitvec::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A sequence of bits, first bit = first branch taken from the tree root.
///
/// Codewords order lexicographically over their bits, with `0 < 1` and a
/// prefix ordered before its extensions (the same order as their `'0'`/`'1'`
/// string forms).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: BitVec<u8, Msb0>,
}

impl Codeword {
    /// Creates an empty codeword (the path of the tree root).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bitslice(bits: &BitSlice<u8, Msb0>) -> Self {
        Self {
            bits: bits.to_bitvec(),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `idx`, or `None` past the end.
    pub fn bit(&self, idx: usize) -> Option<bool> {
        self.bits.get(idx).map(|b| *b)
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Returns this codeword extended by one bit.
    pub fn child(&self, bit: bool) -> Codeword {
        let mut bits = self.bits.clone();
        bits.push(bit);
        Codeword { bits }
    }

    /// Returns this codeword with its last bit removed.
    pub fn parent(&self) -> Option<Codeword> {
        if self.bits.is_empty() {
            return None;
        }
        let mut bits = self.bits.clone();
        bits.pop();
        Some(Codeword { bits })
    }

    /// Returns the codeword that differs from this one only in the last bit.
    pub fn sibling(&self) -> Option<Codeword> {
        let last = *self.bits.last()?;
        let mut bits = self.bits.clone();
        let idx = bits.len() - 1;
        bits.set(idx, !last);
        Some(Codeword { bits })
    }

    /// True if `self` is a prefix of `other` (every codeword is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.len() >= self.len() && other.bits[..self.len()] == self.bits[..]
    }

    /// Longest common prefix of two codewords.
    pub fn common_prefix(&self, other: &Codeword) -> Codeword {
        let shared = self
            .bits()
            .zip(other.bits())
            .take_while(|(a, b)| a == b)
            .count();
        Codeword::from_bitslice(&self.bits[..shared])
    }
}

impl Ord for Codeword {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits().cmp(other.bits())
    }
}

impl PartialOrd for Codeword {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codeword({})", self)
    }
}

impl FromStr for Codeword {
    type Err = HuffmanError;

    /// Parses a string of `'0'` and `'1'` characters.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitVec::<u8, Msb0>::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                other => {
                    return Err(HuffmanError::InvalidArg(format!(
                        "invalid bit character {:?} in codeword {:?}",
                        other, s
                    )));
                }
            }
        }
        Ok(Codeword { bits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cw(s: &str) -> Codeword {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(cw("0110").to_string(), "0110");
        assert_eq!(cw("").len(), 0);
        assert!("01x".parse::<Codeword>().is_err());
    }

    #[test]
    fn test_child_parent_sibling() {
        let c = cw("10");
        assert_eq!(c.child(true), cw("101"));
        assert_eq!(c.parent(), Some(cw("1")));
        assert_eq!(c.sibling(), Some(cw("11")));
        assert_eq!(Codeword::new().parent(), None);
        assert_eq!(Codeword::new().sibling(), None);
    }

    #[test]
    fn test_sibling_flips_only_last_bit() {
        assert_eq!(cw("0").sibling(), Some(cw("1")));
        assert_eq!(cw("0111").sibling(), Some(cw("0110")));
        assert_eq!(cw("0110").sibling().and_then(|s| s.sibling()), Some(cw("0110")));
    }

    #[test]
    fn test_prefix_relations() {
        assert!(cw("10").is_prefix_of(&cw("101")));
        assert!(cw("10").is_prefix_of(&cw("10")));
        assert!(!cw("11").is_prefix_of(&cw("101")));
        assert!(!cw("101").is_prefix_of(&cw("10")));
        assert_eq!(cw("1100").common_prefix(&cw("1101")), cw("110"));
        assert_eq!(cw("0").common_prefix(&cw("1")), Codeword::new());
    }

    #[test]
    fn test_ordering_matches_strings() {
        let mut words = vec![cw("11"), cw("0"), cw("101"), cw("10"), cw("100")];
        words.sort();
        let strings: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        assert_eq!(strings, vec!["0", "10", "100", "101", "11"]);
    }

    #[test]
    fn test_bit_access() {
        let c = cw("01");
        assert_eq!(c.bit(0), Some(false));
        assert_eq!(c.bit(1), Some(true));
        assert_eq!(c.bit(2), None);
    }
}
