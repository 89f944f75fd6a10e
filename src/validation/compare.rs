//! Canned field rules for presence, equality and ordering checks.
//!
//! [`CompareRules`] only registers predicates through
//! [`Validator::with_field_rule`](crate::Validator::with_field_rule) and
//! [`Validator::with_subject_rule`](crate::Validator::with_subject_rule); it adds no
//! evaluation semantics of its own. An absent value (see [`Presence`]) fails every
//! ordering and range check.
//!
//! # Examples
//!
//! ```
//! use valid_rail::validation::{CompareRules, FieldAccessor, Validator};
//!
//! struct Order {
//!     quantity: Option<u32>,
//!     discount: f64,
//! }
//!
//! let order = Validator::<Order>::none()
//!     .in_range_inclusive(
//!         FieldAccessor::new("quantity", |o: &Order| &o.quantity),
//!         1,
//!         100,
//!         |q: &Option<u32>| format!("quantity must be within 1..=100, got {:?}", q),
//!     )
//!     .less_than(
//!         FieldAccessor::new("discount", |o: &Order| &o.discount),
//!         0.5,
//!         |_: &f64| "discount too large",
//!     );
//!
//! let report = order.apply(&Order { quantity: None, discount: 0.5 }).unwrap();
//! assert_eq!(report.field_errors().count(), 2);
//!
//! let report = order.apply(&Order { quantity: Some(100), discount: 0.1 }).unwrap();
//! assert!(!report.has_error());
//! ```

use crate::traits::Presence;
use crate::types::alloc_type::String;
use crate::validation::{FieldAccessor, Validator};

/// Derived comparison combinators for [`Validator`].
///
/// Every method returns a new validator with exactly one rule appended.
pub trait CompareRules<S: ?Sized>: Sized {
    /// The subject itself must be present.
    fn subject_non_null<M, R>(&self, message: M) -> Self
    where
        S: Presence,
        M: Fn(&S) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must be present.
    fn non_null<V, M, R>(&self, field: FieldAccessor<S, V>, message: M) -> Self
    where
        V: Presence + ?Sized + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must be absent.
    fn is_null<V, M, R>(&self, field: FieldAccessor<S, V>, message: M) -> Self
    where
        V: Presence + ?Sized + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must equal `value`.
    fn equal<V, T, M, R>(&self, field: FieldAccessor<S, V>, value: T, message: M) -> Self
    where
        V: PartialEq<T> + ?Sized + 'static,
        T: Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must differ from `value`.
    fn not_equal<V, T, M, R>(&self, field: FieldAccessor<S, V>, value: T, message: M) -> Self
    where
        V: PartialEq<T> + ?Sized + 'static,
        T: Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must be present and `< upper`.
    fn less_than<V, M, R>(&self, field: FieldAccessor<S, V>, upper: V::Value, message: M) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must be present and `<= upper`.
    fn not_greater_than<V, M, R>(
        &self,
        field: FieldAccessor<S, V>,
        upper: V::Value,
        message: M,
    ) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must be present and `> lower`.
    fn greater_than<V, M, R>(&self, field: FieldAccessor<S, V>, lower: V::Value, message: M) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must be present and `>= lower`.
    fn not_less_than<V, M, R>(
        &self,
        field: FieldAccessor<S, V>,
        lower: V::Value,
        message: M,
    ) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must be present and within `lower..=upper`.
    fn in_range_inclusive<V, M, R>(
        &self,
        field: FieldAccessor<S, V>,
        lower: V::Value,
        upper: V::Value,
        message: M,
    ) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;

    /// The field must be present and strictly between `lower` and `upper`.
    fn in_range_exclusive<V, M, R>(
        &self,
        field: FieldAccessor<S, V>,
        lower: V::Value,
        upper: V::Value,
        message: M,
    ) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>;
}

fn ordered<S, V, C, M, R>(
    validator: &Validator<S>,
    field: FieldAccessor<S, V>,
    check: C,
    message: M,
) -> Validator<S>
where
    S: ?Sized + 'static,
    V: Presence + ?Sized + 'static,
    C: Fn(&V::Value) -> bool + Send + Sync + 'static,
    M: Fn(&V) -> R + Send + Sync + 'static,
    R: Into<String>,
{
    validator.with_field_rule(field, move |value: &V| value.present().is_some_and(&check), message)
}

impl<S: ?Sized + 'static> CompareRules<S> for Validator<S> {
    fn subject_non_null<M, R>(&self, message: M) -> Self
    where
        S: Presence,
        M: Fn(&S) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        self.with_subject_rule(|subject: &S| subject.is_present(), message)
    }

    fn non_null<V, M, R>(&self, field: FieldAccessor<S, V>, message: M) -> Self
    where
        V: Presence + ?Sized + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        self.with_field_rule(field, |value: &V| value.is_present(), message)
    }

    fn is_null<V, M, R>(&self, field: FieldAccessor<S, V>, message: M) -> Self
    where
        V: Presence + ?Sized + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        self.with_field_rule(field, |value: &V| !value.is_present(), message)
    }

    fn equal<V, T, M, R>(&self, field: FieldAccessor<S, V>, value: T, message: M) -> Self
    where
        V: PartialEq<T> + ?Sized + 'static,
        T: Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        self.with_field_rule(field, move |actual: &V| *actual == value, message)
    }

    fn not_equal<V, T, M, R>(&self, field: FieldAccessor<S, V>, value: T, message: M) -> Self
    where
        V: PartialEq<T> + ?Sized + 'static,
        T: Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        self.with_field_rule(field, move |actual: &V| *actual != value, message)
    }

    fn less_than<V, M, R>(&self, field: FieldAccessor<S, V>, upper: V::Value, message: M) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        ordered(self, field, move |value: &V::Value| *value < upper, message)
    }

    fn not_greater_than<V, M, R>(
        &self,
        field: FieldAccessor<S, V>,
        upper: V::Value,
        message: M,
    ) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        ordered(self, field, move |value: &V::Value| *value <= upper, message)
    }

    fn greater_than<V, M, R>(&self, field: FieldAccessor<S, V>, lower: V::Value, message: M) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        ordered(self, field, move |value: &V::Value| *value > lower, message)
    }

    fn not_less_than<V, M, R>(
        &self,
        field: FieldAccessor<S, V>,
        lower: V::Value,
        message: M,
    ) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        ordered(self, field, move |value: &V::Value| *value >= lower, message)
    }

    fn in_range_inclusive<V, M, R>(
        &self,
        field: FieldAccessor<S, V>,
        lower: V::Value,
        upper: V::Value,
        message: M,
    ) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        ordered(self, field, move |value: &V::Value| *value >= lower && *value <= upper, message)
    }

    fn in_range_exclusive<V, M, R>(
        &self,
        field: FieldAccessor<S, V>,
        lower: V::Value,
        upper: V::Value,
        message: M,
    ) -> Self
    where
        V: Presence + ?Sized + 'static,
        V::Value: PartialOrd + Sized + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        ordered(self, field, move |value: &V::Value| *value > lower && *value < upper, message)
    }
}
