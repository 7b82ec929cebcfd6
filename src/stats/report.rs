// src/stats/report.rs

//! Plain-text rendering of [`Statistics`].
//!
//! The table layout is fixed: `Symbol` and `Weight` columns padded to ten
//! characters, then the codeword. A space symbol is printed as `space` so the
//! row stays readable; this affects display only.

use crate::stats::statistics::Statistics;
use std::fmt;

const COLUMN_WIDTH: usize = 10;

/// Display label of a symbol.
pub fn symbol_label<S: fmt::Display>(symbol: &S) -> String {
    let label = symbol.to_string();
    if label == " " { "space".to_string() } else { label }
}

/// The symbol/weight/codeword table without the summary lines.
pub struct CodeTableReport<'a, S>(pub &'a Statistics<S>);

impl<S: fmt::Display> fmt::Display for CodeTableReport<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<w$}{:<w$}Huffman Code",
            "Symbol",
            "Weight",
            w = COLUMN_WIDTH
        )?;
        for row in self.0.rows() {
            writeln!(
                f,
                "{:<w$}{:<w$}{}",
                symbol_label(&row.symbol),
                row.weight,
                row.codeword,
                w = COLUMN_WIDTH
            )?;
        }
        Ok(())
    }
}

/// Prints the full report, one line each, in this order:
///
/// ```text
/// Symbol    Weight    Huffman Code
/// <symbol>  <weight>  <codeword>        one row per symbol, code table order
///                                       blank line
/// <symbol>  <probability>%              one row per symbol, two decimals
/// Expected length: <bits> bits/symbol   three decimals
/// Entropy: <bits> bits/symbol           three decimals
/// Efficiency: <percent>%                one decimal, no trailing newline
/// ```
impl<S: fmt::Display> fmt::Display for Statistics<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CodeTableReport(self))?;
        writeln!(f)?;
        for row in self.rows() {
            writeln!(
                f,
                "{:<w$}{:.2}%",
                symbol_label(&row.symbol),
                row.probability,
                w = COLUMN_WIDTH
            )?;
        }
        writeln!(f, "Expected length: {:.3} bits/symbol", self.expected_length())?;
        writeln!(f, "Entropy: {:.3} bits/symbol", self.entropy())?;
        write!(f, "Efficiency: {:.1}%", self.efficiency() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FrequencyTable;
    use crate::encode::huffman::build_code;

    fn stats_of(text: &str) -> Statistics<char> {
        let freq = FrequencyTable::from_text(text);
        let (codes, _) = build_code(&freq).unwrap();
        Statistics::compute(&freq, &codes).unwrap()
    }

    #[test]
    fn test_code_table_layout() {
        let stats = stats_of("aaabbbcc");
        let expected = "\
Symbol    Weight    Huffman Code
b         3         0
a         3         11
c         2         10
";
        assert_eq!(CodeTableReport(&stats).to_string(), expected);
    }

    #[test]
    fn test_space_label() {
        let stats = stats_of("a  b");
        let report = CodeTableReport(&stats).to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "space     2         0");
    }

    #[test]
    fn test_summary_lines() {
        let report = stats_of("aaabbbcc").to_string();
        assert!(report.contains("b         37.50%"));
        assert!(report.contains("Expected length: 1.625 bits/symbol"));
        assert!(report.contains("Entropy: 1.561 bits/symbol"));
        assert!(report.ends_with("Efficiency: 96.1%"));
    }

    #[test]
    fn test_full_report_layout() {
        let expected = "\
Symbol    Weight    Huffman Code
b         3         0
a         3         11
c         2         10

b         37.50%
a         37.50%
c         25.00%
Expected length: 1.625 bits/symbol
Entropy: 1.561 bits/symbol
Efficiency: 96.1%";
        assert_eq!(stats_of("aaabbbcc").to_string(), expected);
    }
}
