use crate::types::FieldKey;
use core::fmt::{self, Display};

/// Identity of the value a rule rejected.
///
/// A value is identified by the address and type of the value it was taken from, plus
/// the field it was reached through:
///
/// - [`RejectedValue::of`] identifies a borrowed value itself. Two identities are equal
///   only when taken from the same place as the same type, so a struct and its first
///   field stay apart even though they share an address.
/// - [`RejectedValue::field_of`] identifies a field of a subject. It depends only on the
///   subject and the field key, so rules borrowing one field in different shapes (say
///   `&user.name` and `user.name.as_str()`) agree on its identity.
///
/// Identities are meaningful only while the subject they were taken from stays borrowed,
/// which holds for the whole of one [`Validator::apply`](crate::Validator::apply) call.
///
/// Values that occupy no memory (empty `str` or slice views, zero-sized types) have no
/// address of their own: every such value of one type yields the same `of` identity.
/// Reports about them are told apart only by the subject they were reached from, which
/// is why field rules use [`RejectedValue::field_of`].
///
/// # Examples
///
/// ```
/// use valid_rail::RejectedValue;
///
/// struct User {
///     name: String,
/// }
///
/// let a = 7u32;
/// let b = 7u32;
/// assert_eq!(RejectedValue::of(&a), RejectedValue::of(&a));
/// assert_ne!(RejectedValue::of(&a), RejectedValue::of(&b));
///
/// let user = User { name: "ada".into() };
/// assert_eq!(RejectedValue::field_of(&user, "name"), RejectedValue::field_of(&user, "name"));
/// assert_ne!(RejectedValue::field_of(&user, "name"), RejectedValue::of(&user.name));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RejectedValue {
    address: usize,
    type_name: &'static str,
    field: Option<FieldKey>,
}

impl RejectedValue {
    /// Captures the identity of `value`.
    #[inline]
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self { address: address_of(value), type_name: core::any::type_name::<T>(), field: None }
    }

    /// Captures the identity of the field `key` of `subject`.
    #[inline]
    pub fn field_of<S: ?Sized, K: Into<FieldKey>>(subject: &S, key: K) -> Self {
        Self {
            address: address_of(subject),
            type_name: core::any::type_name::<S>(),
            field: Some(key.into()),
        }
    }

    /// Name of the type the identity was taken from: the rejected value for
    /// [`of`](RejectedValue::of), the owning subject for
    /// [`field_of`](RejectedValue::field_of).
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The field the value was reached through, if any.
    #[inline]
    pub fn field(&self) -> Option<&FieldKey> {
        self.field.as_ref()
    }
}

#[inline]
fn address_of<T: ?Sized>(value: &T) -> usize {
    value as *const T as *const () as usize
}

impl Display for RejectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#x}", self.type_name, self.address)?;
        if let Some(field) = &self.field {
            write!(f, ".{}", field)?;
        }
        Ok(())
    }
}
