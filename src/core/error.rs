//! Failure taxonomy for key validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reason a key was rejected by a policy.
///
/// Every failed validation produces exactly one of these. The `Display`
/// output is the human-readable message for the failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Key is shorter than the required minimum of {minimum} characters (got {actual})")]
    InsufficientLength { minimum: usize, actual: usize },

    #[error("Key does not contain an uppercase letter")]
    MissingUppercase,

    #[error("Key does not contain a lowercase letter")]
    MissingLowercase,

    #[error("Key does not contain a digit")]
    MissingDigit,

    #[error("Key does not contain any of the required special characters ({set})")]
    MissingSpecialChar { set: String },

    #[error("Key does not contain the secret word '{word}' with the required casing")]
    MissingSecretWord { word: String },
}

impl KeyError {
    /// The tag identifying which check failed.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InsufficientLength { .. } => FailureKind::InsufficientLength,
            Self::MissingUppercase => FailureKind::MissingUppercase,
            Self::MissingLowercase => FailureKind::MissingLowercase,
            Self::MissingDigit => FailureKind::MissingDigit,
            Self::MissingSpecialChar { .. } => FailureKind::MissingSpecialChar,
            Self::MissingSecretWord { .. } => FailureKind::MissingSecretWord,
        }
    }
}

/// Data-free tag for a [`KeyError`], with a stable snake_case code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InsufficientLength,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecialChar,
    MissingSecretWord,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientLength => "insufficient_length",
            Self::MissingUppercase => "missing_uppercase",
            Self::MissingLowercase => "missing_lowercase",
            Self::MissingDigit => "missing_digit",
            Self::MissingSpecialChar => "missing_special_char",
            Self::MissingSecretWord => "missing_secret_word",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
