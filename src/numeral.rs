//! Numeral base table.
//!
//! Maps each supported base to its ordered digit range and maps digit
//! values to the glyph shown on screen.

use std::fmt;

/// Glyphs for every digit value a supported base can produce.
const GLYPHS: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F",
];

/// Numeral base of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum BlockType {
    #[default]
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl BlockType {
    /// Stable identifier, also used as the panel button label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
        }
    }

    /// All variants in panel order.
    pub fn all() -> &'static [BlockType] {
        &[
            Self::Binary,
            Self::Octal,
            Self::Decimal,
            Self::Hexadecimal,
        ]
    }

    pub fn radix(&self) -> u8 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Canonical digit range `[0 .. radix-1]`, ascending.
    pub fn range(&self) -> Vec<u8> {
        (0..self.radix()).collect()
    }

    /// One-sentence description shown as the button tooltip.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Binary => "Binary is a base-2 number system that uses two symbols: 0 and 1.",
            Self::Octal => "Octal is a base-8 number system that uses eight symbols: 0-7.",
            Self::Decimal => "Decimal is a base-10 number system that uses ten symbols: 0-9.",
            Self::Hexadecimal => {
                "Hexadecimal is a base-16 number system that uses sixteen symbols: 0-9, A-F."
            }
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph for a digit value.
///
/// Values below 10 render as their decimal digit, 10..=15 as `A`..=`F`.
/// Anything larger cannot be produced by a supported base and renders empty.
pub fn display_glyph(value: u8) -> &'static str {
    GLYPHS.get(usize::from(value)).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_canonical() {
        assert_eq!(BlockType::Binary.range(), vec![0, 1]);
        assert_eq!(BlockType::Octal.range(), (0..=7).collect::<Vec<u8>>());
        assert_eq!(BlockType::Decimal.range(), (0..=9).collect::<Vec<u8>>());
        assert_eq!(BlockType::Hexadecimal.range().len(), 16);
        assert_eq!(BlockType::Hexadecimal.range().last(), Some(&15));
    }

    #[test]
    fn glyphs_for_letters() {
        let letters: Vec<&str> = (10..=15).map(display_glyph).collect();
        assert_eq!(letters, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn glyphs_below_ten_are_decimal() {
        for value in 0..10u8 {
            assert_eq!(display_glyph(value), value.to_string());
        }
    }

    #[test]
    fn glyph_out_of_table_is_empty() {
        assert_eq!(display_glyph(16), "");
    }
}
