//! Concrete policies and the tools for selecting or composing them.
//!
//! Two built-in policies are provided:
//!
//! - [`StrictSpecialCharPolicy`]: length 8, mixed case, a digit, and one of `@ _ # $ %`
//! - [`SecretWordPolicy`]: length 6, a digit, and a mixed-case "calisto"
//!
//! Any type implementing [`Policy`](crate::core::Policy) can be used in their
//! place. [`PolicyBuilder`] assembles one from the built-in requirements.

pub mod builder;
pub mod error;
pub mod kind;
pub mod secret_word;
pub mod strict;

// Re-export commonly used types
pub use builder::{PolicyBuilder, RulePolicy};
pub use error::PolicyError;
pub use kind::PolicyKind;
pub use secret_word::SecretWordPolicy;
pub use strict::StrictSpecialCharPolicy;
