//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use valid_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`msg!`]
//! - **Types**: [`ErrorTree`], [`FieldAccessor`], [`FieldKey`], [`Validator`]
//! - **Traits**: [`CompareRules`], [`Presence`], [`ValidateExt`]
//!
//! # Examples
//!
//! ```
//! use valid_rail::prelude::*;
//!
//! struct Account {
//!     owner: Option<String>,
//! }
//!
//! let account = Validator::<Account>::none().non_null(
//!     FieldAccessor::new("owner", |a: &Account| &a.owner),
//!     |_: &Option<String>| "owner is required",
//! );
//!
//! let report = Account { owner: None }.validate_with(&account).unwrap();
//! assert_eq!(report.wrapped("account").to_string(), "account.owner: owner is required");
//! ```

// Macros
pub use crate::msg;

// Core types
pub use crate::types::{ErrorTree, FieldKey, MismatchedSubject};
pub use crate::validation::{FieldAccessor, Validator};

// Traits
pub use crate::traits::{Presence, ValidateExt};
pub use crate::validation::CompareRules;
