//! Error tree types and utilities.
//!
//! This module provides the data side of validation: the [`ErrorTree`] report, the
//! [`FieldKey`] path segments it is keyed by, the [`RejectedValue`] identity carried at
//! each level, and the [`MismatchedSubject`] programmer error raised when reports about
//! different subjects are merged.
//!
//! # Examples
//!
//! ```
//! use valid_rail::types::{ErrorTree, FieldKey};
//!
//! let report = ErrorTree::wrap(
//!     "user",
//!     ErrorTree::scope("email", ErrorTree::leaf(None, "missing domain")),
//! );
//!
//! let user = report.get(&FieldKey::from("user")).unwrap();
//! assert!(user.field("email").is_some());
//! assert_eq!(report.to_string(), "user.email: missing domain");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_tree;
pub mod field_key;
pub mod mismatch;
pub mod rejected;
pub mod tree_formatter;

pub use error_tree::*;
pub use field_key::*;
pub use mismatch::*;
pub use rejected::*;
pub use tree_formatter::{TreeFormatConfig, TreeFormatter};

/// SmallVec-backed collection used for the messages of one tree level.
///
/// Uses inline storage for a single element, the common case of a leaf produced by
/// one failing rule.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
