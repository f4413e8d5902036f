//! Hint labels: ordinal-to-sequence encoding.
//!
//! Labels are produced by digit substitution, not by a positional base-k
//! encoding. Each decimal digit of the ordinal is replaced by the alphabet
//! character at that digit's index, so ordinal `12` becomes
//! `alphabet[1] alphabet[2]`. With the default alphabet:
//!
//! | Ordinal | Label |
//! |---------|-------|
//! | 1 | `A` |
//! | 2 | `D` |
//! | 9 | `C` |
//! | 10 | `AS` |
//! | 123 | `ADF` |
//!
//! A label always has as many characters as the ordinal has digits, and a
//! prefix of a label is the label of a prefix of the ordinal. Labels are
//! therefore unique without any collision handling.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Default hint characters, one per decimal digit 0-9.
pub const DEFAULT_ALPHABET: &str = "sadfjklewc";

/// Number of characters an alphabet must contain (one per decimal digit).
pub const ALPHABET_LEN: usize = 10;

/// A validated set of ten hint characters, stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    chars: [char; ALPHABET_LEN],
}

impl Alphabet {
    /// Parse an alphabet from exactly ten distinct ASCII letters.
    ///
    /// Input is case-insensitive; the stored form is upper case.
    pub fn new(alphabet: &str) -> Result<Self, ApiError> {
        let upper: Vec<char> = alphabet.chars().map(|c| c.to_ascii_uppercase()).collect();

        if upper.len() != ALPHABET_LEN {
            return Err(ApiError::invalid_alphabet(
                alphabet,
                &format!("expected {} characters, got {}", ALPHABET_LEN, upper.len()),
            ));
        }
        if let Some(bad) = upper.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(ApiError::invalid_alphabet(
                alphabet,
                &format!("'{}' is not an ASCII letter", bad),
            ));
        }

        let mut chars = ['\0'; ALPHABET_LEN];
        for (i, &c) in upper.iter().enumerate() {
            if chars[..i].contains(&c) {
                return Err(ApiError::invalid_alphabet(
                    alphabet,
                    &format!("'{}' appears more than once", c),
                ));
            }
            chars[i] = c;
        }

        Ok(Self { chars })
    }

    /// Encode a 1-based ordinal into its label.
    ///
    /// Returns `None` for ordinal 0, which is never assigned.
    #[must_use]
    pub fn encode(&self, ordinal: u32) -> Option<String> {
        if ordinal == 0 {
            return None;
        }
        Some(
            ordinal
                .to_string()
                .bytes()
                .map(|digit| self.chars[usize::from(digit - b'0')])
                .collect(),
        )
    }

    /// Map a label back to its ordinal.
    ///
    /// Returns `None` for characters outside the alphabet, for the empty
    /// label, and for labels that would need a leading zero.
    #[must_use]
    pub fn decode(&self, label: &str) -> Option<u32> {
        let mut ordinal: u32 = 0;
        for (i, c) in label.chars().enumerate() {
            let digit = self.digit_of(c)?;
            if i == 0 && digit == 0 {
                return None;
            }
            ordinal = ordinal.checked_mul(10)?.checked_add(digit)?;
        }
        (ordinal > 0).then_some(ordinal)
    }

    /// Case-insensitive membership test, returning the stored (upper-case)
    /// form of the character.
    #[must_use]
    pub fn normalize(&self, c: char) -> Option<char> {
        let upper = c.to_ascii_uppercase();
        self.chars.contains(&upper).then_some(upper)
    }

    fn digit_of(&self, c: char) -> Option<u32> {
        let upper = c.to_ascii_uppercase();
        self.chars
            .iter()
            .position(|&a| a == upper)
            .and_then(|pos| u32::try_from(pos).ok())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: ['S', 'A', 'D', 'F', 'J', 'K', 'L', 'E', 'W', 'C'],
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.chars.iter().collect()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Hands out labels for consecutive ordinals within one session.
///
/// Ordinals start at 1 and are never reused; a fresh session starts a
/// fresh allocator.
#[derive(Debug)]
pub struct LabelAllocator<'a> {
    alphabet: &'a Alphabet,
    assigned: u32,
}

impl<'a> LabelAllocator<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self {
            alphabet,
            assigned: 0,
        }
    }

    /// Allocate the label for the next ordinal.
    pub fn next_label(&mut self) -> String {
        self.assigned += 1;
        // Ordinals handed out here are always >= 1.
        self.alphabet.encode(self.assigned).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_alphabet_matches_constant() {
        assert_eq!(Alphabet::new(DEFAULT_ALPHABET).unwrap(), Alphabet::default());
        assert_eq!(Alphabet::default().to_string(), "SADFJKLEWC");
    }

    #[test]
    fn test_single_digit_ordinals() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.encode(1).as_deref(), Some("A"));
        assert_eq!(alphabet.encode(2).as_deref(), Some("D"));
        assert_eq!(alphabet.encode(9).as_deref(), Some("C"));
    }

    #[test]
    fn test_multi_digit_ordinals_substitute_each_digit() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.encode(10).as_deref(), Some("AS"));
        assert_eq!(alphabet.encode(12).as_deref(), Some("AD"));
        assert_eq!(alphabet.encode(123).as_deref(), Some("ADF"));
        assert_eq!(alphabet.encode(500).as_deref(), Some("KSS"));
    }

    #[test]
    fn test_zero_is_not_encodable() {
        assert_eq!(Alphabet::default().encode(0), None);
    }

    #[test]
    fn test_length_matches_decimal_digits_and_labels_are_unique() {
        let alphabet = Alphabet::default();
        let mut seen = HashSet::new();
        for n in 1..=500u32 {
            let label = alphabet.encode(n).unwrap();
            assert_eq!(label.chars().count(), n.to_string().len(), "ordinal {}", n);
            assert!(seen.insert(label), "duplicate label for ordinal {}", n);
        }
    }

    #[test]
    fn test_label_prefix_is_ordinal_prefix() {
        let alphabet = Alphabet::default();
        let label = alphabet.encode(472).unwrap();
        assert_eq!(alphabet.decode(&label[..2]), Some(47));
        assert_eq!(alphabet.decode(&label[..1]), Some(4));
    }

    #[test]
    fn test_decode_inverts_encode() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.decode("ADF"), Some(123));
        assert_eq!(alphabet.decode("adf"), Some(123));
        assert_eq!(alphabet.decode("KSS"), Some(500));
    }

    #[test]
    fn test_decode_rejects_leading_zero_and_unknown_chars() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.decode("S"), None);
        assert_eq!(alphabet.decode("SA"), None);
        assert_eq!(alphabet.decode("AX"), None);
        assert_eq!(alphabet.decode(""), None);
    }

    #[test]
    fn test_normalize_is_case_insensitive() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.normalize('s'), Some('S'));
        assert_eq!(alphabet.normalize('S'), Some('S'));
        assert_eq!(alphabet.normalize('x'), None);
        assert_eq!(alphabet.normalize('1'), None);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = Alphabet::new("abc").unwrap_err();
        assert!(err.message.contains("expected 10 characters, got 3"));
    }

    #[test]
    fn test_rejects_duplicates_case_insensitively() {
        let err = Alphabet::new("sadfjklewS").unwrap_err();
        assert!(err.message.contains("'S' appears more than once"));
    }

    #[test]
    fn test_rejects_non_letters() {
        assert!(Alphabet::new("sadfjklew1").is_err());
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let json = serde_json::to_string(&Alphabet::default()).unwrap();
        assert_eq!(json, "\"SADFJKLEWC\"");
        let parsed: Alphabet = serde_json::from_str("\"qwertyuiop\"").unwrap();
        assert_eq!(parsed.encode(1).as_deref(), Some("W"));
        assert!(serde_json::from_str::<Alphabet>("\"qq\"").is_err());
    }

    #[test]
    fn test_allocator_counts_from_one() {
        let alphabet = Alphabet::default();
        let mut labels = LabelAllocator::new(&alphabet);
        assert_eq!(labels.next_label(), "A");
        assert_eq!(labels.next_label(), "D");
        assert_eq!(labels.next_label(), "F");
    }
}
