use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};

/// One segment of an error path: a named field or the ordinal index of a sequence element.
///
/// Index segments render as plain decimal digits, so `items.0.name` reads the same as it
/// would in the subject. A name that is itself a canonical decimal number (`"0"`, `"17"`,
/// but not `"007"`) is stored as the index it spells, so every rendered path maps back to
/// exactly one key. Indices sort numerically and before any name.
///
/// # Examples
///
/// ```
/// use valid_rail::FieldKey;
///
/// assert_eq!(FieldKey::from("email").to_string(), "email");
/// assert_eq!(FieldKey::from(3usize).to_string(), "3");
/// assert_eq!(FieldKey::from("3"), FieldKey::from(3usize));
/// assert!(FieldKey::from(2usize) < FieldKey::from(10usize));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldKey {
    segment: Segment,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Segment {
    Index(usize),
    Name(Cow<'static, str>),
}

impl FieldKey {
    /// Creates a named key, or an index key when `name` is a canonical decimal number.
    pub fn name<N: Into<Cow<'static, str>>>(name: N) -> Self {
        let name = name.into();
        match canonical_index(&name) {
            Some(index) => Self::index(index),
            None => Self { segment: Segment::Name(name) },
        }
    }

    /// Creates an ordinal key.
    #[inline]
    pub fn index(index: usize) -> Self {
        Self { segment: Segment::Index(index) }
    }

    /// Returns the name if this is a named key.
    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match &self.segment {
            Segment::Name(name) => Some(name),
            Segment::Index(_) => None,
        }
    }

    /// Returns the ordinal if this is an index key.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self.segment {
            Segment::Index(index) => Some(index),
            Segment::Name(_) => None,
        }
    }

    /// Whether `key` renders to the same text as this key.
    pub(crate) fn matches(&self, key: &str) -> bool {
        match &self.segment {
            Segment::Name(name) => **name == *key,
            Segment::Index(index) => canonical_index(key) == Some(*index),
        }
    }
}

fn canonical_index(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    let canonical = match bytes {
        [] => false,
        [b'0'] => true,
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    };
    if canonical {
        name.parse().ok()
    } else {
        None
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.segment {
            Segment::Name(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&'static str> for FieldKey {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::name(name)
    }
}

impl From<String> for FieldKey {
    #[inline]
    fn from(name: String) -> Self {
        Self::name(name)
    }
}

impl From<usize> for FieldKey {
    #[inline]
    fn from(index: usize) -> Self {
        Self::index(index)
    }
}
