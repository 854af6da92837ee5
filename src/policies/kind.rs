//! Selection of built-in policies by name.

use crate::core::Policy;
use crate::policies::error::PolicyError;
use crate::policies::{SecretWordPolicy, StrictSpecialCharPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of a built-in policy.
///
/// # Example
///
/// ```rust
/// use keyrules::core::Policy;
/// use keyrules::policies::PolicyKind;
///
/// let kind: PolicyKind = "secret_word".parse().unwrap();
/// assert_eq!(kind, PolicyKind::SecretWord);
/// assert_eq!(kind.into_policy().name(), "secret_word");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    StrictSpecialChar,
    SecretWord,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 2] = [PolicyKind::StrictSpecialChar, PolicyKind::SecretWord];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrictSpecialChar => "strict_special_char",
            Self::SecretWord => "secret_word",
        }
    }

    /// Construct the policy this name refers to.
    pub fn into_policy(self) -> Box<dyn Policy> {
        match self {
            Self::StrictSpecialChar => Box::new(StrictSpecialCharPolicy::new()),
            Self::SecretWord => Box::new(SecretWordPolicy::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PolicyError::UnknownPolicy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.to_string().parse::<PolicyKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "ganymede".parse::<PolicyKind>(),
            Err(PolicyError::UnknownPolicy("ganymede".to_string()))
        );
    }

    #[test]
    fn policy_name_matches_kind_name() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.into_policy().name(), kind.as_str());
        }
    }

    #[test]
    fn serde_uses_same_names() {
        let json = serde_json::to_string(&PolicyKind::StrictSpecialChar).unwrap();
        assert_eq!(json, "\"strict_special_char\"");

        let kind: PolicyKind = serde_json::from_str("\"secret_word\"").unwrap();
        assert_eq!(kind, PolicyKind::SecretWord);
    }
}
