//! Mode-transition signals returned to the key dispatcher.

use serde::{Deserialize, Serialize};

/// What the caller's mode controller should do after a hint-mode operation.
///
/// The serialized tokens are the strings the browser's mode controller
/// already understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModeSignal {
    /// No transition; hint mode stays active.
    #[default]
    #[serde(rename = "ignore")]
    Ignore,
    /// Switch to text-edit (insert) mode.
    #[serde(rename = "mode::insert")]
    Insert,
    /// Return to normal mode.
    #[serde(rename = "mode::normal")]
    Normal,
}

impl ModeSignal {
    /// Wire token for this signal.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModeSignal::Ignore => "ignore",
            ModeSignal::Insert => "mode::insert",
            ModeSignal::Normal => "mode::normal",
        }
    }

    /// Whether hint mode ended with this signal.
    #[must_use]
    pub fn is_transition(self) -> bool {
        self != ModeSignal::Ignore
    }
}

impl std::fmt::Display for ModeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
