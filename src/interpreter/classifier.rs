use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

static DECIMAL: OnceLock<Regex> = OnceLock::new();
static ROMAN: OnceLock<Regex> = OnceLock::new();

/// Digits, optionally led by a non-zero digit.
fn decimal_pattern() -> &'static Regex {
    DECIMAL.get_or_init(|| {
               Regex::new(r"^[1-9]?[0-9]+$").unwrap_or_else(|e| {
                                                panic!("invalid decimal pattern: {e}")
                                            })
           })
}

/// Canonical subtractive Roman numerals from the empty string up to `MMMCMXCIX`.
fn roman_pattern() -> &'static Regex {
    ROMAN.get_or_init(|| {
             Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})?(XC|XL|L?X{0,3})?(IX|IV|V?I{0,3})?$")
                 .unwrap_or_else(|e| panic!("invalid Roman pattern: {e}"))
         })
}

/// The numeral system an operand is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    /// Arabic digits, such as `7`.
    Decimal,
    /// Roman numerals, such as `VII`.
    Roman,
}

impl NumeralSystem {
    /// The lowest and highest accepted operand, written in this system.
    #[must_use]
    pub const fn range_labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Decimal => ("1", "10"),
            Self::Roman => ("I", "X"),
        }
    }
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal => write!(f, "decimal"),
            Self::Roman => write!(f, "Roman"),
        }
    }
}

/// A raw operand tagged with the grammar it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    /// Matches the decimal grammar.
    Decimal(&'a str),
    /// Matches the Roman numeral grammar and is not empty.
    Roman(&'a str),
    /// Matches neither grammar, or is empty.
    Invalid(&'a str),
}

impl<'a> Operand<'a> {
    /// Classifies a raw operand.
    ///
    /// The empty string is vacuously a Roman numeral under the grammar, but it
    /// is never a usable operand, so it is classified as [`Operand::Invalid`].
    ///
    /// # Example
    /// ```
    /// use romanus::interpreter::classifier::Operand;
    ///
    /// assert_eq!(Operand::classify("10"), Operand::Decimal("10"));
    /// assert_eq!(Operand::classify("IX"), Operand::Roman("IX"));
    /// assert_eq!(Operand::classify("IIII"), Operand::Invalid("IIII"));
    /// assert_eq!(Operand::classify(""), Operand::Invalid(""));
    /// ```
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        let operand = if raw.is_empty() {
            Self::Invalid(raw)
        } else if decimal_pattern().is_match(raw) {
            Self::Decimal(raw)
        } else if roman_pattern().is_match(raw) {
            Self::Roman(raw)
        } else {
            Self::Invalid(raw)
        };

        debug!(?operand, "classified operand");

        operand
    }

    /// The numeral system of a valid operand, or `None` for an invalid one.
    #[must_use]
    pub const fn system(&self) -> Option<NumeralSystem> {
        match self {
            Self::Decimal(_) => Some(NumeralSystem::Decimal),
            Self::Roman(_) => Some(NumeralSystem::Roman),
            Self::Invalid(_) => None,
        }
    }
}
