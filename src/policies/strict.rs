//! Policy requiring mixed case, a digit, and a special character.

use crate::core::checks::SPECIAL_CHARS;
use crate::core::{Policy, Requirement};
use std::borrow::Cow;

/// Minimum key length for [`StrictSpecialCharPolicy`].
pub const STRICT_MINIMUM_LENGTH: usize = 8;

const REQUIREMENTS: &[Requirement] = &[
    Requirement::MinimumLength {
        minimum: STRICT_MINIMUM_LENGTH,
    },
    Requirement::Uppercase,
    Requirement::Lowercase,
    Requirement::Digit,
    Requirement::SpecialChar {
        set: Cow::Borrowed(SPECIAL_CHARS),
    },
];

/// Accepts keys of at least 8 characters with an uppercase letter, a
/// lowercase letter, a digit, and one of `@ _ # $ %`.
///
/// Checks run in that order and the first missing property is reported.
///
/// # Example
///
/// ```rust
/// use keyrules::core::{KeyError, Policy};
/// use keyrules::policies::StrictSpecialCharPolicy;
///
/// let policy = StrictSpecialCharPolicy::new();
///
/// assert_eq!(policy.is_valid("Abcdef1$"), Ok(true));
/// assert_eq!(
///     policy.is_valid("Abcdefg1"),
///     Err(KeyError::MissingSpecialChar { set: "@_#$%".to_string() })
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictSpecialCharPolicy;

impl StrictSpecialCharPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for StrictSpecialCharPolicy {
    fn name(&self) -> &str {
        "strict_special_char"
    }

    fn requirements(&self) -> &[Requirement] {
        REQUIREMENTS
    }

    fn minimum_length(&self) -> usize {
        STRICT_MINIMUM_LENGTH
    }
}
