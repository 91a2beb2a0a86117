//! # Validation Mode
//!
//! [`Mode::Strict`] runs every check. [`Mode::Lenient`] skips requiredness,
//! null, type and criterion checks but still applies defaults, structural
//! rebuilding and casts. Lenient mode is a trust boundary: it exists for hot
//! paths whose input was already validated elsewhere, and it silently
//! accepts invalid input.
//!
//! The mode is always an explicit value carried by the validation scope,
//! never ambient process state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How thoroughly a validation call checks its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Run every check.
    #[default]
    #[serde(alias = "development")]
    Strict,
    /// Only default, rebuild and cast.
    #[serde(alias = "production")]
    Lenient,
}

impl Mode {
    /// Returns true for [`Mode::Strict`].
    pub fn is_strict(self) -> bool {
        self == Mode::Strict
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Lenient => "lenient",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string did not name a validation mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown validation mode \"{0}\" (expected strict, lenient, development or production)")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "development" => Ok(Mode::Strict),
            "lenient" | "production" => Ok(Mode::Lenient),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}
