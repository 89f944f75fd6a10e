//! Traits that extend the core validation types.
//!
//! - [`Presence`]: distinguishes absent ("null") values from present ones
//! - [`ValidateExt`]: runs a validator in method-call position on the subject
//!
//! # Examples
//!
//! ```
//! use valid_rail::traits::{Presence, ValidateExt};
//! use valid_rail::Validator;
//!
//! let present = Validator::<Option<u8>>::none()
//!     .with_subject_rule(|value: &Option<u8>| value.is_present(), |_: &Option<u8>| "missing");
//!
//! assert!(Some(1u8).validate_with(&present).unwrap().is_none());
//! assert!(None::<u8>.validate_with(&present).unwrap().has_error());
//! ```

pub mod presence;
pub mod validate_ext;

pub use presence::Presence;
pub use validate_ext::ValidateExt;
