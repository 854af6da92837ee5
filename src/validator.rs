//! Single entry point for validating keys against a selected policy.

use crate::core::{KeyError, Policy};
use crate::policies::PolicyKind;
use tracing::{debug, trace};

/// Holds one policy and forwards every validation call to it.
///
/// Calling code depends on `Validator` alone, whichever policy is active.
///
/// # Example
///
/// ```rust
/// use keyrules::core::KeyError;
/// use keyrules::policies::{SecretWordPolicy, StrictSpecialCharPolicy};
/// use keyrules::Validator;
///
/// let strict = Validator::new(StrictSpecialCharPolicy::new());
/// assert_eq!(strict.is_valid("Abcdef1$"), Ok(true));
///
/// let secret = Validator::new(SecretWordPolicy::new());
/// assert_eq!(
///     secret.is_valid("abc123CALISTO"),
///     Err(KeyError::MissingSecretWord { word: "calisto".to_string() })
/// );
/// ```
pub struct Validator {
    policy: Box<dyn Policy>,
}

impl Validator {
    pub fn new(policy: impl Policy + 'static) -> Self {
        Self {
            policy: Box::new(policy),
        }
    }

    /// Build a validator for a built-in policy selected by name.
    pub fn for_kind(kind: PolicyKind) -> Self {
        Self {
            policy: kind.into_policy(),
        }
    }

    pub fn policy(&self) -> &dyn Policy {
        self.policy.as_ref()
    }

    /// Validate `key`, returning the first failing check.
    pub fn validate(&self, key: &str) -> Result<(), KeyError> {
        match self.policy.validate(key) {
            Ok(()) => {
                trace!(policy = self.policy.name(), "key accepted");
                Ok(())
            }
            Err(err) => {
                debug!(policy = self.policy.name(), kind = %err.kind(), "key rejected");
                Err(err)
            }
        }
    }

    /// Returns `Ok(true)` when the key is accepted, or the first failure.
    pub fn is_valid(&self, key: &str) -> Result<bool, KeyError> {
        self.validate(key).map(|()| true)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("policy", &self.policy.name())
            .finish()
    }
}
