//! Keyrules: a small pluggable rule engine for password policies
//!
//! A candidate key is checked against a named policy and either accepted or
//! rejected with one specific, typed reason. Every check is a pure function
//! of the key, so policies are immutable and can be shared freely.
//!
//! # Core Concepts
//!
//! - **Requirement**: A single ordered check (length, case, digit, special character, secret word)
//! - **Policy**: An ordered sequence of requirements, validated fail-fast
//! - **Validator**: A facade that holds one policy and forwards calls to it
//! - **Audit**: Diagnostics that collect every failure instead of the first
//!
//! # Example
//!
//! ```rust
//! use keyrules::core::KeyError;
//! use keyrules::policies::{PolicyKind, SecretWordPolicy};
//! use keyrules::Validator;
//!
//! let validator = Validator::new(SecretWordPolicy::new());
//! assert_eq!(validator.is_valid("abc123CaLiStO"), Ok(true));
//! assert_eq!(validator.is_valid("calisto"), Err(KeyError::MissingDigit));
//!
//! let strict = Validator::for_kind("strict_special_char".parse::<PolicyKind>().unwrap());
//! assert_eq!(
//!     strict.is_valid("A1"),
//!     Err(KeyError::InsufficientLength { minimum: 8, actual: 2 })
//! );
//! ```

pub mod audit;
pub mod core;
pub mod policies;
pub mod validator;

// Re-export commonly used types
pub use core::{FailureKind, KeyError, Policy, Requirement};
pub use policies::{PolicyBuilder, PolicyKind, SecretWordPolicy, StrictSpecialCharPolicy};
pub use validator::Validator;
