//! Validator combinators and the rule-application engine.
//!
//! This module provides the [`Validator`] builder, which chains rules over a subject type
//! and applies them to produce an [`ErrorTree`](crate::ErrorTree). Rules come in four
//! kinds:
//!
//! - subject rules check the whole subject,
//! - field rules check a value projected by a [`FieldAccessor`],
//! - elements rules re-apply a nested validator to every element of a projected sequence,
//! - nested rules re-apply a nested validator to one projected value.
//!
//! # Examples
//!
//! ```
//! use valid_rail::validation::{FieldAccessor, Validator};
//!
//! struct Line {
//!     sku: String,
//! }
//!
//! struct Cart {
//!     lines: Vec<Line>,
//! }
//!
//! let line = Validator::<Line>::none().with_field_rule(
//!     FieldAccessor::new("sku", |l: &Line| l.sku.as_str()),
//!     |sku: &str| !sku.is_empty(),
//!     |_: &str| "sku is required",
//! );
//! let cart = Validator::<Cart>::none()
//!     .with_elements_rule(FieldAccessor::new("lines", |c: &Cart| &c.lines), line);
//!
//! let input = Cart {
//!     lines: vec![Line { sku: "A-1".into() }, Line { sku: String::new() }],
//! };
//! let report = cart.apply(&input).unwrap();
//! assert_eq!(report.to_string(), "lines.1.sku: sku is required");
//! ```
pub mod accessor;
pub mod compare;
pub mod rule;
pub mod validator;

pub use self::accessor::FieldAccessor;
pub use self::compare::CompareRules;
pub use self::rule::RuleKind;
pub use self::validator::Validator;
