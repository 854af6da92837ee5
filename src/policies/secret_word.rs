//! Policy requiring a digit and the secret word with mixed casing.

use crate::core::checks::SECRET_WORD;
use crate::core::{Policy, Requirement};
use std::borrow::Cow;

/// Minimum key length for [`SecretWordPolicy`].
pub const SECRET_WORD_MINIMUM_LENGTH: usize = 6;

const REQUIREMENTS: &[Requirement] = &[
    Requirement::MinimumLength {
        minimum: SECRET_WORD_MINIMUM_LENGTH,
    },
    Requirement::Digit,
    Requirement::SecretWord {
        word: Cow::Borrowed(SECRET_WORD),
    },
];

/// Accepts keys of at least 6 characters that contain a digit and the word
/// "calisto" written with between two and six uppercase letters.
///
/// The word is found case-insensitively, and only its first occurrence is
/// inspected.
///
/// # Example
///
/// ```rust
/// use keyrules::core::{KeyError, Policy};
/// use keyrules::policies::SecretWordPolicy;
///
/// let policy = SecretWordPolicy::new();
///
/// assert_eq!(policy.is_valid("abc123CaLiStO"), Ok(true));
/// assert_eq!(policy.is_valid("calisto"), Err(KeyError::MissingDigit));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecretWordPolicy;

impl SecretWordPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for SecretWordPolicy {
    fn name(&self) -> &str {
        "secret_word"
    }

    fn requirements(&self) -> &[Requirement] {
        REQUIREMENTS
    }

    fn minimum_length(&self) -> usize {
        SECRET_WORD_MINIMUM_LENGTH
    }
}
