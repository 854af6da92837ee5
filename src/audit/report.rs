//! Serializable summary of an audit.

use crate::audit::{audit, ReportError};
use crate::core::{FailureKind, KeyError, Policy};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// One failed requirement in an [`AuditReport`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&KeyError> for Finding {
    fn from(err: &KeyError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Outcome of auditing one key against one policy.
///
/// The key itself is never stored in the report.
///
/// # Example
///
/// ```rust
/// use keyrules::audit::AuditReport;
/// use keyrules::core::FailureKind;
/// use keyrules::policies::SecretWordPolicy;
///
/// let report = AuditReport::new(&SecretWordPolicy::new(), "calisto");
///
/// assert!(!report.accepted);
/// assert_eq!(report.findings[0].kind, FailureKind::MissingDigit);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Name of the audited policy
    pub policy: String,

    /// Whether the key passed every requirement
    pub accepted: bool,

    /// Failed requirements, in the order the policy checks them
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn new<P: Policy + ?Sized>(policy: &P, key: &str) -> Self {
        let findings: Vec<Finding> = match audit(policy, key) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().map(Finding::from).collect(),
        };

        Self {
            policy: policy.name().to_string(),
            accepted: findings.is_empty(),
            findings,
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{SecretWordPolicy, StrictSpecialCharPolicy};

    #[test]
    fn accepted_report_has_no_findings() {
        let report = AuditReport::new(&StrictSpecialCharPolicy::new(), "Abcdef1$");
        assert!(report.accepted);
        assert!(report.findings.is_empty());
        assert_eq!(report.policy, "strict_special_char");
    }

    #[test]
    fn findings_follow_requirement_order() {
        let report = AuditReport::new(&StrictSpecialCharPolicy::new(), "ab");
        let kinds: Vec<FailureKind> = report.findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FailureKind::InsufficientLength,
                FailureKind::MissingUppercase,
                FailureKind::MissingDigit,
                FailureKind::MissingSpecialChar,
            ]
        );
    }

    #[test]
    fn json_omits_the_key() {
        let key = "abc123CALISTO";
        let report = AuditReport::new(&SecretWordPolicy::new(), key);
        let json = report.to_json().unwrap();

        assert!(!json.contains(key));
        assert!(json.contains("\"missing_secret_word\""));

        let parsed: AuditReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn pretty_json_is_multiline() {
        let report = AuditReport::new(&SecretWordPolicy::new(), "x");
        let json = report.to_json_pretty().unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"accepted\": false"));
    }
}
