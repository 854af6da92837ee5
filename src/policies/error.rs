//! Errors for selecting and composing policies.

use thiserror::Error;

/// Errors that can occur when selecting a named policy or building a custom one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown policy '{0}'. Expected one of: strict_special_char, secret_word")]
    UnknownPolicy(String),

    #[error("Minimum length not specified. Call .min_length(n) before .build()")]
    MissingMinimumLength,

    #[error("Special character set is empty")]
    EmptySpecialCharSet,

    #[error("Secret word is empty")]
    EmptySecretWord,

    #[error("Requirement '{0}' was added more than once")]
    DuplicateRequirement(String),
}
