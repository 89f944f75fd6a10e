use crate::types::alloc_type::Arc;
use crate::types::FieldKey;
use core::fmt;

type Extract<S, V> = Arc<dyn Fn(&S) -> &V + Send + Sync>;

/// A named projection from a subject to one of its components.
///
/// The name is supplied by the caller and becomes the path segment under which failures
/// of this field are reported. Rules sharing a name report about the same field: their
/// failures are identified by the subject and the name, whatever shape the extractor
/// borrows the field in, and merge into one entry.
///
/// # Examples
///
/// ```
/// use valid_rail::FieldAccessor;
///
/// struct User {
///     name: String,
/// }
///
/// let name = FieldAccessor::new("name", |user: &User| &user.name);
/// let user = User { name: "ada".into() };
///
/// assert_eq!(name.name().to_string(), "name");
/// assert_eq!(name.extract(&user), "ada");
/// ```
pub struct FieldAccessor<S: ?Sized, V: ?Sized> {
    name: FieldKey,
    extract: Extract<S, V>,
}

impl<S: ?Sized, V: ?Sized> FieldAccessor<S, V> {
    /// Creates an accessor from a field name and a borrowing extractor.
    pub fn new<N, F>(name: N, extract: F) -> Self
    where
        N: Into<FieldKey>,
        F: Fn(&S) -> &V + Send + Sync + 'static,
    {
        Self { name: name.into(), extract: Arc::new(extract) }
    }

    /// The path segment failures of this field are reported under.
    #[inline]
    pub fn name(&self) -> &FieldKey {
        &self.name
    }

    /// Projects the field out of `subject`.
    #[inline]
    pub fn extract<'a>(&self, subject: &'a S) -> &'a V {
        (self.extract)(subject)
    }
}

impl<S: ?Sized, V: ?Sized> Clone for FieldAccessor<S, V> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), extract: Arc::clone(&self.extract) }
    }
}

impl<S: ?Sized, V: ?Sized> fmt::Debug for FieldAccessor<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .field("extract", &"<function>")
            .finish()
    }
}
