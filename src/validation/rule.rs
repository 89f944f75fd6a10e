//! The closed set of rules a [`Validator`] is built from.

use crate::types::alloc_type::{Arc, String};
use crate::types::{ErrorTree, FieldKey, MismatchedSubject, RejectedValue};
use crate::validation::{FieldAccessor, Validator};

pub(crate) type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
pub(crate) type Message<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// The kind of check a rule performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Predicate over the whole subject; failures are reported at the subject's own level.
    Subject,
    /// Predicate over one projected field; failures are scoped under the field name.
    Field,
    /// Nested validator applied to every element of a projected sequence; failures are
    /// scoped under the field name and the element's index.
    Elements,
    /// Nested validator applied to one projected value; failures are scoped under the
    /// field name.
    Nested,
}

/// A single validation check over `S`.
pub(crate) enum Rule<S: ?Sized> {
    Subject(SubjectRule<S>),
    Field(Arc<dyn FieldCheck<S>>),
    Elements(Arc<dyn FieldCheck<S>>),
    Nested(Arc<dyn FieldCheck<S>>),
}

impl<S: ?Sized> Rule<S> {
    #[inline]
    pub(crate) fn kind(&self) -> RuleKind {
        match self {
            Self::Subject(_) => RuleKind::Subject,
            Self::Field(_) => RuleKind::Field,
            Self::Elements(_) => RuleKind::Elements,
            Self::Nested(_) => RuleKind::Nested,
        }
    }

    #[inline]
    pub(crate) fn field(&self) -> Option<&FieldKey> {
        match self {
            Self::Subject(_) => None,
            Self::Field(check) | Self::Elements(check) | Self::Nested(check) => Some(check.field()),
        }
    }

    /// Evaluates the rule, returning its contribution to the report.
    ///
    /// An empty tree means the rule passed.
    pub(crate) fn check(&self, subject: &S) -> Result<ErrorTree, MismatchedSubject> {
        match self {
            Self::Subject(rule) => Ok(rule.check(subject)),
            Self::Field(check) | Self::Elements(check) | Self::Nested(check) => {
                check.check(subject)
            }
        }
    }
}

impl<S: ?Sized> Clone for Rule<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Subject(rule) => Self::Subject(rule.clone()),
            Self::Field(check) => Self::Field(Arc::clone(check)),
            Self::Elements(check) => Self::Elements(Arc::clone(check)),
            Self::Nested(check) => Self::Nested(Arc::clone(check)),
        }
    }
}

pub(crate) struct SubjectRule<S: ?Sized> {
    predicate: Predicate<S>,
    message: Message<S>,
}

impl<S: ?Sized> SubjectRule<S> {
    pub(crate) fn new(predicate: Predicate<S>, message: Message<S>) -> Self {
        Self { predicate, message }
    }

    fn check(&self, subject: &S) -> ErrorTree {
        if (self.predicate)(subject) {
            return ErrorTree::none();
        }
        ErrorTree::leaf_of(subject, (self.message)(subject))
    }
}

impl<S: ?Sized> Clone for SubjectRule<S> {
    fn clone(&self) -> Self {
        Self { predicate: Arc::clone(&self.predicate), message: Arc::clone(&self.message) }
    }
}

/// Type-erased rule that projects a field out of `S` before checking it.
pub(crate) trait FieldCheck<S: ?Sized>: Send + Sync {
    fn field(&self) -> &FieldKey;

    fn check(&self, subject: &S) -> Result<ErrorTree, MismatchedSubject>;
}

pub(crate) struct FieldRule<S: ?Sized, V: ?Sized> {
    accessor: FieldAccessor<S, V>,
    predicate: Predicate<V>,
    message: Message<V>,
}

impl<S: ?Sized, V: ?Sized> FieldRule<S, V> {
    pub(crate) fn new(
        accessor: FieldAccessor<S, V>,
        predicate: Predicate<V>,
        message: Message<V>,
    ) -> Self {
        Self { accessor, predicate, message }
    }
}

impl<S: ?Sized, V: ?Sized> FieldCheck<S> for FieldRule<S, V> {
    fn field(&self) -> &FieldKey {
        self.accessor.name()
    }

    fn check(&self, subject: &S) -> Result<ErrorTree, MismatchedSubject> {
        let value = self.accessor.extract(subject);
        if (self.predicate)(value) {
            return Ok(ErrorTree::none());
        }
        let name = self.accessor.name();
        let rejected = RejectedValue::field_of(subject, name.clone());
        let leaf = ErrorTree::leaf(Some(rejected), (self.message)(value));
        Ok(ErrorTree::scope(name.clone(), leaf))
    }
}

pub(crate) struct ElementsRule<S: ?Sized, C: ?Sized, E> {
    accessor: FieldAccessor<S, C>,
    nested: Validator<E>,
}

impl<S: ?Sized, C: ?Sized, E> ElementsRule<S, C, E> {
    pub(crate) fn new(accessor: FieldAccessor<S, C>, nested: Validator<E>) -> Self {
        Self { accessor, nested }
    }
}

impl<S, C, E> FieldCheck<S> for ElementsRule<S, C, E>
where
    S: ?Sized,
    C: ?Sized,
    for<'a> &'a C: IntoIterator<Item = &'a E>,
{
    fn field(&self) -> &FieldKey {
        self.accessor.name()
    }

    fn check(&self, subject: &S) -> Result<ErrorTree, MismatchedSubject> {
        let mut elements = ErrorTree::none();
        for (index, element) in self.accessor.extract(subject).into_iter().enumerate() {
            let child = self.nested.apply(element)?;
            if child.has_error() {
                elements = elements.try_plus(ErrorTree::scope(index, child))?;
            }
        }
        Ok(ErrorTree::scope(self.accessor.name().clone(), elements))
    }
}

pub(crate) struct NestedRule<S: ?Sized, V: ?Sized> {
    accessor: FieldAccessor<S, V>,
    nested: Validator<V>,
}

impl<S: ?Sized, V: ?Sized> NestedRule<S, V> {
    pub(crate) fn new(accessor: FieldAccessor<S, V>, nested: Validator<V>) -> Self {
        Self { accessor, nested }
    }
}

impl<S: ?Sized, V: ?Sized> FieldCheck<S> for NestedRule<S, V> {
    fn field(&self) -> &FieldKey {
        self.accessor.name()
    }

    fn check(&self, subject: &S) -> Result<ErrorTree, MismatchedSubject> {
        let name = self.accessor.name();
        let child = self
            .nested
            .apply(self.accessor.extract(subject))?
            .reidentified(RejectedValue::field_of(subject, name.clone()));
        Ok(ErrorTree::scope(name.clone(), child))
    }
}
