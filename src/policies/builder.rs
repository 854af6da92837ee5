//! Builder API for composing custom policies.

use crate::core::{Policy, Requirement};
use crate::policies::error::PolicyError;
use std::borrow::Cow;

/// A policy assembled from requirements at runtime.
///
/// Built with [`PolicyBuilder`]. The minimum-length check always runs
/// first; the remaining requirements run in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePolicy {
    name: String,
    minimum_length: usize,
    requirements: Vec<Requirement>,
}

impl Policy for RulePolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    fn minimum_length(&self) -> usize {
        self.minimum_length
    }
}

/// Builder for creating a [`RulePolicy`].
///
/// # Example
///
/// ```rust
/// use keyrules::core::{KeyError, Policy};
/// use keyrules::policies::PolicyBuilder;
///
/// let policy = PolicyBuilder::new("pin")
///     .min_length(4)
///     .require_digit()
///     .build()
///     .unwrap();
///
/// assert_eq!(policy.is_valid("12ab"), Ok(true));
/// assert_eq!(policy.is_valid("abcd"), Err(KeyError::MissingDigit));
/// ```
pub struct PolicyBuilder {
    name: String,
    minimum_length: Option<usize>,
    requirements: Vec<Requirement>,
}

impl PolicyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minimum_length: None,
            requirements: Vec::new(),
        }
    }

    /// Set the minimum key length (required)
    pub fn min_length(mut self, n: usize) -> Self {
        self.minimum_length = Some(n);
        self
    }

    pub fn require_uppercase(self) -> Self {
        self.require(Requirement::Uppercase)
    }

    pub fn require_lowercase(self) -> Self {
        self.require(Requirement::Lowercase)
    }

    pub fn require_digit(self) -> Self {
        self.require(Requirement::Digit)
    }

    /// Require at least one character from `set`
    pub fn require_special_char(self, set: impl Into<String>) -> Self {
        self.require(Requirement::SpecialChar {
            set: Cow::Owned(set.into()),
        })
    }

    /// Require `word` with at least two, but not all, letters uppercase
    pub fn require_secret_word(self, word: impl Into<String>) -> Self {
        self.require(Requirement::SecretWord {
            word: Cow::Owned(word.into()),
        })
    }

    /// Add an arbitrary requirement
    pub fn require(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Build the policy.
    ///
    /// A `MinimumLength` requirement passed to [`require`](Self::require)
    /// counts as the minimum length when [`min_length`](Self::min_length)
    /// was not called.
    pub fn build(self) -> Result<RulePolicy, PolicyError> {
        let mut minimum_length = self.minimum_length;
        let mut ordered: Vec<Requirement> = Vec::with_capacity(self.requirements.len() + 1);

        for requirement in self.requirements {
            match &requirement {
                Requirement::MinimumLength { minimum } => {
                    if minimum_length.is_some() {
                        return Err(PolicyError::DuplicateRequirement(
                            "minimum_length".to_string(),
                        ));
                    }
                    minimum_length = Some(*minimum);
                    continue;
                }
                Requirement::SpecialChar { set } if set.is_empty() => {
                    return Err(PolicyError::EmptySpecialCharSet);
                }
                Requirement::SecretWord { word } if word.is_empty() => {
                    return Err(PolicyError::EmptySecretWord);
                }
                _ => {}
            }

            if ordered.iter().any(|existing| existing.same_kind(&requirement)) {
                return Err(PolicyError::DuplicateRequirement(kind_name(&requirement)));
            }
            ordered.push(requirement);
        }

        let minimum_length = minimum_length.ok_or(PolicyError::MissingMinimumLength)?;
        ordered.insert(
            0,
            Requirement::MinimumLength {
                minimum: minimum_length,
            },
        );

        Ok(RulePolicy {
            name: self.name,
            minimum_length,
            requirements: ordered,
        })
    }
}

fn kind_name(requirement: &Requirement) -> String {
    match requirement {
        Requirement::MinimumLength { .. } => "minimum_length",
        Requirement::Uppercase => "uppercase",
        Requirement::Lowercase => "lowercase",
        Requirement::Digit => "digit",
        Requirement::SpecialChar { .. } => "special_char",
        Requirement::SecretWord { .. } => "secret_word",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyError;
    use crate::policies::StrictSpecialCharPolicy;

    #[test]
    fn builder_requires_minimum_length() {
        let result = PolicyBuilder::new("no-length").require_digit().build();
        assert_eq!(result, Err(PolicyError::MissingMinimumLength));
    }

    #[test]
    fn minimum_length_always_runs_first() {
        let policy = PolicyBuilder::new("digit-first")
            .require_digit()
            .min_length(10)
            .build()
            .unwrap();

        assert_eq!(
            policy.requirements()[0],
            Requirement::MinimumLength { minimum: 10 }
        );
        assert_eq!(
            policy.is_valid("abc"),
            Err(KeyError::InsufficientLength {
                minimum: 10,
                actual: 3
            })
        );
    }

    #[test]
    fn requirements_keep_insertion_order() {
        let policy = PolicyBuilder::new("digit-then-upper")
            .min_length(4)
            .require_digit()
            .require_uppercase()
            .build()
            .unwrap();

        // Missing both: the digit check was added first.
        assert_eq!(policy.is_valid("abcd"), Err(KeyError::MissingDigit));
        assert_eq!(policy.is_valid("abc1"), Err(KeyError::MissingUppercase));
        assert_eq!(policy.is_valid("Abc1"), Ok(true));
    }

    #[test]
    fn minimum_length_requirement_counts_as_min_length() {
        let policy = PolicyBuilder::new("via-require")
            .require(Requirement::MinimumLength { minimum: 3 })
            .build()
            .unwrap();
        assert_eq!(policy.minimum_length(), 3);

        let result = PolicyBuilder::new("twice")
            .min_length(3)
            .require(Requirement::MinimumLength { minimum: 5 })
            .build();
        assert_eq!(
            result,
            Err(PolicyError::DuplicateRequirement("minimum_length".to_string()))
        );
    }

    #[test]
    fn duplicate_requirements_are_rejected() {
        let result = PolicyBuilder::new("dup")
            .min_length(4)
            .require_special_char("!")
            .require_special_char("?")
            .build();
        assert_eq!(
            result,
            Err(PolicyError::DuplicateRequirement("special_char".to_string()))
        );
    }

    #[test]
    fn empty_sets_are_rejected() {
        assert_eq!(
            PolicyBuilder::new("empty")
                .min_length(1)
                .require_special_char("")
                .build(),
            Err(PolicyError::EmptySpecialCharSet)
        );
        assert_eq!(
            PolicyBuilder::new("empty")
                .min_length(1)
                .require_secret_word("")
                .build(),
            Err(PolicyError::EmptySecretWord)
        );
    }

    #[test]
    fn builder_can_reproduce_strict_policy() {
        let custom = PolicyBuilder::new("strict-copy")
            .min_length(8)
            .require_uppercase()
            .require_lowercase()
            .require_digit()
            .require_special_char("@_#$%")
            .build()
            .unwrap();

        let strict = StrictSpecialCharPolicy::new();
        assert_eq!(custom.requirements(), strict.requirements());
        for key in ["Abcdef1$", "abcdef1$", "A1", "ABCDEF1$", "Abcdefg$", "Abcdefg1"] {
            assert_eq!(custom.validate(key), strict.validate(key), "key {key}");
        }
    }

    #[test]
    fn custom_secret_word_uses_same_casing_rule() {
        let policy = PolicyBuilder::new("europa")
            .min_length(5)
            .require_secret_word("europa")
            .build()
            .unwrap();

        assert_eq!(policy.is_valid("xEuRopa"), Ok(true));
        assert_eq!(
            policy.is_valid("xEUROPA"),
            Err(KeyError::MissingSecretWord {
                word: "europa".to_string()
            })
        );
    }
}
