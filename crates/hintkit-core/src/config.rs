//! Hint-mode configuration.
//!
//! Values come from, in increasing priority:
//! 1. Built-in defaults (`sadfjklewc`, 500 hints, yellow badges)
//! 2. A JSON config file (loaded by the caller, see [`HintConfig::from_json`])
//! 3. `HINTKIT_ALPHABET` / `HINTKIT_MAX_HINTS` environment variables
//!
//! Empty environment variables are ignored.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::label::Alphabet;
use crate::overlay::BadgeStyle;

/// Default cap on hints per session.
pub const DEFAULT_MAX_HINTS: usize = 500;

/// Environment variable overriding the hint alphabet.
pub const ALPHABET_ENV: &str = "HINTKIT_ALPHABET";

/// Environment variable overriding the hint cap.
pub const MAX_HINTS_ENV: &str = "HINTKIT_MAX_HINTS";

/// Settings for one hint-mode session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintConfig {
    /// Ten characters, one per decimal digit.
    pub alphabet: Alphabet,
    /// Scanning stops once this many hints exist.
    pub max_hints: usize,
    pub badge: BadgeStyle,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            max_hints: DEFAULT_MAX_HINTS,
            badge: BadgeStyle::default(),
        }
    }
}

impl HintConfig {
    /// Parse a JSON config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_config(format!("Malformed config: {}", e)))?;
        config.validate()
    }

    /// Apply environment overrides on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self, ApiError> {
        self.with_overrides(
            env::var(ALPHABET_ENV).ok().as_deref(),
            env::var(MAX_HINTS_ENV).ok().as_deref(),
        )
    }

    /// Apply explicit override values (empty strings are ignored).
    fn with_overrides(
        mut self,
        alphabet: Option<&str>,
        max_hints: Option<&str>,
    ) -> Result<Self, ApiError> {
        if let Some(value) = alphabet.filter(|v| !v.is_empty()) {
            self.alphabet = Alphabet::new(value)?;
        }
        if let Some(value) = max_hints.filter(|v| !v.is_empty()) {
            self.max_hints = value.trim().parse().map_err(|_| {
                ApiError::invalid_config(format!(
                    "{} must be a positive integer, got '{}'",
                    MAX_HINTS_ENV, value
                ))
            })?;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ApiError> {
        if self.max_hints == 0 {
            return Err(ApiError::invalid_config("max_hints must be at least 1"));
        }
        Ok(self)
    }
}
