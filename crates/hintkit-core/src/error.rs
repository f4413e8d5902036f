//! Error types with actionable suggestions.
//!
//! Hint mode itself never fails: bad keystrokes, stale elements and
//! unreachable frames all degrade to [`ModeSignal::Ignore`]. Errors only
//! surface while setting a session up, from configuration or from building
//! a page model.
//!
//! [`ModeSignal::Ignore`]: crate::mode::ModeSignal::Ignore

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes for setup failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidConfig,
    InvalidPage,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidConfig => write!(f, "INVALID_CONFIG"),
            ErrorCode::InvalidPage => write!(f, "INVALID_PAGE"),
        }
    }
}

/// An error with a message and a suggestion for fixing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub suggestion: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (hint: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidConfig,
            message: message.into(),
            suggestion: Some("Check the hint configuration values and try again".into()),
        }
    }

    /// Create an alphabet error naming the rejected value.
    pub fn invalid_alphabet(alphabet: &str, reason: &str) -> Self {
        Self {
            code: ErrorCode::InvalidConfig,
            message: format!("Invalid hint alphabet '{}': {}", alphabet, reason),
            suggestion: Some(
                "Use exactly 10 distinct letters, one per decimal digit (e.g. 'sadfjklewc')"
                    .into(),
            ),
        }
    }

    pub fn invalid_page(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidPage,
            message: message.into(),
            suggestion: Some("Check the page description against the documented format".into()),
        }
    }

    /// Create a page error for a frame nesting that never terminates.
    pub fn frame_depth_exceeded(max: usize) -> Self {
        Self {
            code: ErrorCode::InvalidPage,
            message: format!("Frame nesting deeper than {} levels", max),
            suggestion: Some("Flatten the page description or mark deep frames cross_origin".into()),
        }
    }
}
