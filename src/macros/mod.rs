//! Message-building macros.
//!
//! - [`macro@crate::msg`] - Turns a format string with one placeholder into a message
//!   function that formats the rejected value, for use with any rule combinator.
//!
//! # Examples
//!
//! ```
//! use valid_rail::{msg, FieldAccessor, Validator};
//!
//! struct Item {
//!     price: i64,
//! }
//!
//! let item = Validator::<Item>::none().with_field_rule(
//!     FieldAccessor::new("price", |i: &Item| &i.price),
//!     |price: &i64| *price >= 0,
//!     msg!("price must not be negative, got {}"),
//! );
//!
//! let report = item.apply(&Item { price: -3 }).unwrap();
//! assert_eq!(report.to_string(), "price: price must not be negative, got -3");
//! ```

/// Builds a message function from a format string with exactly one placeholder.
///
/// The placeholder receives the rejected value, so any `format!` spec applies: `{}` needs
/// `Display`, `{:?}` needs `Debug`. The resulting closure can be passed wherever a rule
/// expects a message function.
///
/// # Examples
///
/// ```
/// use valid_rail::msg;
///
/// let describe = msg!("got {:?}");
/// assert_eq!(describe(&Some(4)), "got Some(4)");
/// ```
#[macro_export]
macro_rules! msg {
    ($fmt:literal $(,)?) => {
        |value: &_| $crate::__private::format!($fmt, value)
    };
}
