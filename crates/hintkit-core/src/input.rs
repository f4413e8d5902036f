//! Key names and their hint-mode actions.
//!
//! The browser's key dispatcher turns key presses into [`HintKey`]s; this
//! module parses the textual form used by the CLI and routes each key to
//! the matching [`HintModeSlot`] operation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::Dom;
use crate::mode::ModeSignal;
use crate::session::HintModeSlot;

/// A key as seen by hint mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "char", rename_all = "snake_case")]
pub enum HintKey {
    /// Drop the last typed character.
    Backspace,
    /// Activate the hint whose label equals the typed sequence.
    Enter,
    /// Leave hint mode.
    Escape,
    /// Any other printable key.
    Char(char),
}

impl HintKey {
    /// Parse one key name (case insensitive) or a single character.
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "backspace" | "bs" => return Some(Self::Backspace),
            "enter" | "return" => return Some(Self::Enter),
            "escape" | "esc" => return Some(Self::Escape),
            "space" => return Some(Self::Char(' ')),
            _ => {}
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self::Char(c)),
            _ => None,
        }
    }

    /// Route this key to `slot`.
    pub fn dispatch<D: Dom>(self, slot: &mut HintModeSlot<D>, dom: &mut D) -> ModeSignal {
        match self {
            Self::Backspace => {
                slot.remove_char(dom);
                ModeSignal::Ignore
            }
            Self::Enter => slot.activate_current_match(dom),
            Self::Escape => {
                if !slot.is_installed() {
                    return ModeSignal::Ignore;
                }
                slot.uninstall(dom);
                ModeSignal::Normal
            }
            Self::Char(c) => {
                let mut buf = [0u8; 4];
                slot.add_char(dom, c.encode_utf8(&mut buf))
            }
        }
    }
}

impl fmt::Display for HintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backspace => f.write_str("Backspace"),
            Self::Enter => f.write_str("Enter"),
            Self::Escape => f.write_str("Escape"),
            Self::Char(' ') => f.write_str("Space"),
            Self::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Parse a space-separated key sequence such as `"a Backspace s Enter"`.
///
/// Returns `None` if the sequence is empty or contains an unknown key.
///
/// # Examples
///
/// ```
/// use hintkit_core::input::{parse_key_sequence, HintKey};
///
/// let keys = parse_key_sequence("a Backspace d Enter").unwrap();
/// assert_eq!(keys.len(), 4);
/// assert_eq!(keys[1], HintKey::Backspace);
/// ```
pub fn parse_key_sequence(sequence: &str) -> Option<Vec<HintKey>> {
    let parts: Vec<&str> = sequence.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }
    parts.into_iter().map(HintKey::parse).collect()
}
