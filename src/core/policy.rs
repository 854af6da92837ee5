//! The policy contract shared by every concrete policy.

use super::error::KeyError;
use super::requirement::Requirement;

/// A named, ordered set of requirements applied to candidate keys.
///
/// Implementations hold only immutable configuration, so a single instance
/// can be reused across any number of calls and threads. Validation is
/// fail-fast: requirements run in the order returned by
/// [`requirements`](Policy::requirements) and the first failure is the
/// one reported.
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
/// assert_eq!(policy.is_valid("abcdef1$"), Err(KeyError::MissingUppercase));
/// ```
pub trait Policy: Send + Sync {
    /// Name used for display and diagnostics.
    fn name(&self) -> &str;

    /// Ordered checks run by [`validate`](Policy::validate).
    fn requirements(&self) -> &[Requirement];

    /// Shortest key this policy accepts.
    fn minimum_length(&self) -> usize {
        self.requirements()
            .iter()
            .find_map(|req| match req {
                Requirement::MinimumLength { minimum } => Some(*minimum),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Run every requirement in order, stopping at the first failure.
    fn validate(&self, key: &str) -> Result<(), KeyError> {
        self.requirements()
            .iter()
            .try_for_each(|requirement| requirement.check(key))
    }

    /// Returns `Ok(true)` when the key is accepted, or the first failure.
    fn is_valid(&self, key: &str) -> Result<bool, KeyError> {
        self.validate(key).map(|()| true)
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn requirements(&self) -> &[Requirement] {
        (**self).requirements()
    }

    fn minimum_length(&self) -> usize {
        (**self).minimum_length()
    }

    fn validate(&self, key: &str) -> Result<(), KeyError> {
        (**self).validate(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DigitsOnly;

    const DIGITS_ONLY: &[Requirement] =
        &[Requirement::MinimumLength { minimum: 4 }, Requirement::Digit];

    impl Policy for DigitsOnly {
        fn name(&self) -> &str {
            "digits-only"
        }

        fn requirements(&self) -> &[Requirement] {
            DIGITS_ONLY
        }
    }

    #[test]
    fn validate_stops_at_first_failure() {
        assert_eq!(
            DigitsOnly.validate("ab"),
            Err(KeyError::InsufficientLength {
                minimum: 4,
                actual: 2
            })
        );
        assert_eq!(DigitsOnly.validate("abcd"), Err(KeyError::MissingDigit));
        assert_eq!(DigitsOnly.validate("abc1"), Ok(()));
    }

    #[test]
    fn minimum_length_is_read_from_requirements() {
        assert_eq!(DigitsOnly.minimum_length(), 4);
    }

    #[test]
    fn boxed_policy_delegates() {
        let boxed: Box<dyn Policy> = Box::new(DigitsOnly);
        assert_eq!(boxed.name(), "digits-only");
        assert_eq!(boxed.is_valid("abc1"), Ok(true));
        assert_eq!(boxed.is_valid("abcd"), Err(KeyError::MissingDigit));
    }
}
