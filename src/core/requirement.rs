//! Ordered validation steps.

use super::checks;
use super::error::KeyError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single check a policy runs against a key.
///
/// A policy is an ordered sequence of requirements. Each requirement maps a
/// failing key to exactly one [`KeyError`].
///
/// # Example
///
/// ```rust
/// use keyrules::core::{KeyError, Requirement};
///
/// assert!(Requirement::Digit.check("abc1").is_ok());
/// assert_eq!(Requirement::Digit.check("abc"), Err(KeyError::MissingDigit));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    MinimumLength { minimum: usize },
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar { set: Cow<'static, str> },
    SecretWord { word: Cow<'static, str> },
}

impl Requirement {
    /// Run this requirement against `key`.
    pub fn check(&self, key: &str) -> Result<(), KeyError> {
        match self {
            Self::MinimumLength { minimum } => {
                if checks::meets_minimum_length(key, *minimum) {
                    Ok(())
                } else {
                    Err(KeyError::InsufficientLength {
                        minimum: *minimum,
                        actual: key.chars().count(),
                    })
                }
            }
            Self::Uppercase => ensure(checks::contains_uppercase(key), || {
                KeyError::MissingUppercase
            }),
            Self::Lowercase => ensure(checks::contains_lowercase(key), || {
                KeyError::MissingLowercase
            }),
            Self::Digit => ensure(checks::contains_digit(key), || KeyError::MissingDigit),
            Self::SpecialChar { set } => ensure(checks::contains_any_of(key, set), || {
                KeyError::MissingSpecialChar {
                    set: set.to_string(),
                }
            }),
            Self::SecretWord { word } => ensure(checks::contains_secret_word(key, word), || {
                KeyError::MissingSecretWord {
                    word: word.to_string(),
                }
            }),
        }
    }

    /// Whether two requirements check the same thing, ignoring parameters.
    pub(crate) fn same_kind(&self, other: &Requirement) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

fn ensure(passed: bool, error: impl FnOnce() -> KeyError) -> Result<(), KeyError> {
    if passed {
        Ok(())
    } else {
        Err(error())
    }
}
