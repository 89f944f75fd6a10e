//! Subject-side entry point for running a [`Validator`].
//!
//! # Examples
//!
//! ```
//! use valid_rail::traits::ValidateExt;
//! use valid_rail::Validator;
//!
//! let positive = Validator::<i64>::none().with_subject_rule(|n: &i64| *n > 0, |n: &i64| {
//!     format!("{} is not positive", n)
//! });
//!
//! assert!(!5i64.validate_with(&positive).unwrap().has_error());
//! assert_eq!(
//!     (-2i64).validate_with(&positive).unwrap().wrapped("amount").to_string(),
//!     "amount: -2 is not positive"
//! );
//! ```

use crate::types::{ErrorTree, MismatchedSubject};
use crate::validation::Validator;

/// Extension trait for validating a value with a [`Validator`] in method-call position.
pub trait ValidateExt {
    /// Applies `validator` to `self`. See [`Validator::apply`].
    ///
    /// # Errors
    ///
    /// Returns [`MismatchedSubject`] if the validator merges reports about different values.
    fn validate_with(&self, validator: &Validator<Self>) -> Result<ErrorTree, MismatchedSubject> {
        validator.apply(self)
    }
}

impl<T: ?Sized> ValidateExt for T {}

