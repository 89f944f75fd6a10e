//! Composable validators that report failures as an error tree mirroring the subject.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `valid_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building and Applying a Validator
//!
//! ```
//! use valid_rail::{msg, FieldAccessor, Validator};
//!
//! struct Entity {
//!     field1: Option<String>,
//!     field2: i64,
//!     children: Vec<Entity>,
//! }
//!
//! let child = Validator::<Entity>::none().with_field_rule(
//!     FieldAccessor::new("field1", |e: &Entity| &e.field1),
//!     Option::is_some,
//!     |_: &Option<String>| "field1 must not be null",
//! );
//!
//! let entity = child
//!     .with_field_rule(
//!         FieldAccessor::new("field2", |e: &Entity| &e.field2),
//!         |field2: &i64| *field2 < 1,
//!         msg!("field2 should be less than 1, got {}"),
//!     )
//!     .with_elements_rule(FieldAccessor::new("children", |e: &Entity| &e.children), child);
//!
//! let leaf = || Entity { field1: None, field2: 0, children: Vec::new() };
//! let root = Entity { field1: Some("null".into()), field2: 0, children: vec![leaf(), leaf()] };
//!
//! let report = entity.apply(&root).unwrap().wrapped("root");
//! assert_eq!(
//!     report.to_string(),
//!     "root.children.0.field1: field1 must not be null\n\
//!      root.children.1.field1: field1 must not be null"
//! );
//! ```
//!
//! ## Combining Error Trees
//!
//! ```
//! use valid_rail::ErrorTree;
//!
//! let a = ErrorTree::scope("name", ErrorTree::leaf(None, "too short"));
//! let b = ErrorTree::scope("name", ErrorTree::leaf(None, "not capitalized"));
//!
//! let merged = a.clone().try_plus(b.clone()).unwrap();
//! assert_eq!(merged, b.try_plus(a).unwrap());
//! assert_eq!(merged.field("name").unwrap().messages().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Message-building macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for subjects and projected values
pub mod traits;
/// ErrorTree algebra and rendering
pub mod types;
/// Validator builder and rule-application engine
pub mod validation;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

pub use traits::*;
pub use types::{
    ErrorTree, ErrorVec, FieldKey, MismatchedSubject, RejectedValue, TreeFormatConfig,
    TreeFormatter,
};
pub use validation::*;
