//! Core validation types and logic.
//!
//! This module contains the pure core of the rule engine:
//! - Primitive string predicates (`checks`)
//! - Ordered validation steps via `Requirement`
//! - The `Policy` contract
//! - The failure taxonomy
//!
//! Nothing in this module performs I/O or holds mutable state.

pub mod checks;
mod error;
mod policy;
mod requirement;

pub use error::{FailureKind, KeyError};
pub use policy::Policy;
pub use requirement::Requirement;
