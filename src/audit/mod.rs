//! Non-fail-fast diagnostics for a key.
//!
//! [`Policy::validate`](crate::core::Policy::validate) stops at the first
//! failing check and reports exactly one [`KeyError`]. That is the contract
//! of validation. For diagnostics it is often more useful to see everything
//! a key is missing at once, so this module runs every requirement and
//! accumulates the failures with Stillwater's `Validation` type.
//!
//! # Example
//!
//! ```rust
//! use keyrules::audit::audit;
//! use keyrules::core::KeyError;
//! use keyrules::policies::StrictSpecialCharPolicy;
//! use stillwater::validation::Validation;
//!
//! match audit(&StrictSpecialCharPolicy::new(), "abc") {
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors.len(), 4);
//!         assert!(errors.iter().any(|e| matches!(e, KeyError::MissingUppercase)));
//!     }
//!     Validation::Success(_) => panic!("expected failures"),
//! }
//! ```

pub mod error;
pub mod report;

use crate::core::{KeyError, Policy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub use error::ReportError;
pub use report::{AuditReport, Finding};

/// Run every requirement of `policy` against `key`, accumulating ALL failures.
///
/// Failures are returned in requirement order. Succeeds exactly when
/// `policy.validate(key)` succeeds.
pub fn audit<P: Policy + ?Sized>(
    policy: &P,
    key: &str,
) -> Validation<(), NonEmptyVec<KeyError>> {
    let checks: Vec<Validation<(), NonEmptyVec<KeyError>>> = policy
        .requirements()
        .iter()
        .map(|requirement| match requirement.check(key) {
            Ok(()) => Validation::success(()),
            Err(err) => Validation::fail(err),
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
