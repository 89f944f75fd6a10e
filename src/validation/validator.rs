use crate::types::alloc_type::{Arc, String, Vec};
use crate::types::{ErrorTree, MismatchedSubject, RejectedValue};
use crate::validation::rule::{
    ElementsRule, FieldRule, Message, NestedRule, Predicate, Rule, RuleKind, SubjectRule,
};
use crate::validation::FieldAccessor;
use core::fmt;

/// An immutable, ordered rule set over subjects of type `S`.
///
/// Every builder method returns a new validator with one more rule and leaves `self`
/// untouched, so a validator can be shared between threads and reused for any number of
/// [`apply`](Validator::apply) calls.
///
/// Rules are evaluated in declaration order. In accumulate mode (the default) every rule
/// runs and all failures are merged into one [`ErrorTree`]; in fail-fast mode evaluation
/// stops after the first failing rule.
///
/// # Examples
///
/// ```
/// use valid_rail::{FieldAccessor, Validator};
///
/// struct Signup {
///     email: String,
///     age: u32,
/// }
///
/// let signup = Validator::<Signup>::none()
///     .with_field_rule(
///         FieldAccessor::new("email", |s: &Signup| s.email.as_str()),
///         |email: &str| email.contains('@'),
///         |email: &str| format!("`{}` is not an email address", email),
///     )
///     .with_field_rule(
///         FieldAccessor::new("age", |s: &Signup| &s.age),
///         |age: &u32| *age >= 18,
///         |_: &u32| "must be an adult",
///     );
///
/// let report = signup.apply(&Signup { email: "nobody".into(), age: 12 }).unwrap();
/// assert_eq!(
///     report.to_string(),
///     "age: must be an adult\nemail: `nobody` is not an email address"
/// );
///
/// let first_only = signup.fail_fast(true).apply(&Signup { email: "nobody".into(), age: 12 });
/// assert_eq!(first_only.unwrap().field_errors().count(), 1);
/// ```
#[must_use]
pub struct Validator<S: ?Sized> {
    rules: Vec<Rule<S>>,
    fail_fast: bool,
}

impl<S: ?Sized> Validator<S> {
    /// A validator without rules, in accumulate mode. Accepts every subject.
    #[inline]
    pub fn none() -> Self {
        Self { rules: Vec::new(), fail_fast: false }
    }

    /// Returns a copy with the evaluation mode set; the rules are unchanged.
    #[inline]
    pub fn fail_fast(&self, fail_fast: bool) -> Self {
        Self { rules: self.rules.clone(), fail_fast }
    }

    /// Whether evaluation stops at the first failing rule.
    #[inline]
    #[must_use]
    pub fn is_fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Number of registered rules.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Kinds of the registered rules, in evaluation order.
    pub fn rule_kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.iter().map(Rule::kind)
    }

    /// Validates `subject`, returning the merged report of every failing rule.
    ///
    /// An empty tree means the subject passed. In fail-fast mode the report holds exactly
    /// the contribution of the first failing rule. Nested validators used by elements and
    /// nested rules follow their own fail-fast flag.
    ///
    /// # Errors
    ///
    /// Returns [`MismatchedSubject`] when two rules report different values under the same
    /// path, for example an elements rule and a nested rule registered under one name.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn apply(&self, subject: &S) -> Result<ErrorTree, MismatchedSubject> {
        let mut errors = ErrorTree::none();

        for (position, rule) in self.rules.iter().enumerate() {
            let contribution = rule.check(subject)?;
            if !contribution.has_error() {
                continue;
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(
                rule = position,
                kind = ?rule.kind(),
                field = ?rule.field(),
                "validation rule rejected subject"
            );

            errors = match errors.try_plus(contribution) {
                Ok(errors) => errors,
                Err(mismatch) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(rule = position, %mismatch, "rule reported a different subject");
                    return Err(mismatch);
                }
            };

            if self.fail_fast {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    rule = position,
                    skipped = self.rules.len() - position - 1,
                    "fail-fast validator stopped at first failing rule"
                );
                break;
            }
        }

        Ok(errors)
    }

    fn push(&self, rule: Rule<S>) -> Self {
        let mut rules = Vec::with_capacity(self.rules.len() + 1);
        rules.extend(self.rules.iter().cloned());
        rules.push(rule);
        Self { rules, fail_fast: self.fail_fast }
    }
}

impl<S: ?Sized + 'static> Validator<S> {
    /// Adds a rule over the whole subject.
    ///
    /// On failure the report gets `message(subject)` at its own level, with the subject as
    /// rejected value.
    pub fn with_subject_rule<P, M, R>(&self, predicate: P, message: M) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
        M: Fn(&S) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        let predicate: Predicate<S> = Arc::new(predicate);
        let message: Message<S> =
            Arc::new(move |subject: &S| -> String { message(subject).into() });
        self.push(Rule::Subject(SubjectRule::new(predicate, message)))
    }

    /// Adds a rule over one projected field.
    ///
    /// On failure the report gets `message(value)` under the accessor's name. The rejected
    /// value is [`RejectedValue::field_of`] the subject and that name, so every rule on the
    /// same name merges into one entry.
    pub fn with_field_rule<V, P, M, R>(
        &self,
        accessor: FieldAccessor<S, V>,
        predicate: P,
        message: M,
    ) -> Self
    where
        V: ?Sized + 'static,
        P: Fn(&V) -> bool + Send + Sync + 'static,
        M: Fn(&V) -> R + Send + Sync + 'static,
        R: Into<String>,
    {
        let predicate: Predicate<V> = Arc::new(predicate);
        let message: Message<V> =
            Arc::new(move |value: &V| -> String { message(value).into() });
        self.push(Rule::Field(Arc::new(FieldRule::new(accessor, predicate, message))))
    }

    /// Applies `nested` to every element of a projected sequence.
    ///
    /// The report of the element at index `i` is scoped under `name.i`; passing elements
    /// leave no entry.
    pub fn with_elements_rule<C, E>(
        &self,
        accessor: FieldAccessor<S, C>,
        nested: Validator<E>,
    ) -> Self
    where
        C: ?Sized + 'static,
        E: 'static,
        for<'a> &'a C: IntoIterator<Item = &'a E>,
    {
        self.push(Rule::Elements(Arc::new(ElementsRule::new(accessor, nested))))
    }

    /// Applies `nested` to one projected value, scoping its report under the field name.
    pub fn with_nested_rule<V>(
        &self,
        accessor: FieldAccessor<S, V>,
        nested: Validator<V>,
    ) -> Self
    where
        V: ?Sized + 'static,
    {
        self.push(Rule::Nested(Arc::new(NestedRule::new(accessor, nested))))
    }
}

impl<S: ?Sized> Clone for Validator<S> {
    fn clone(&self) -> Self {
        Self { rules: self.rules.clone(), fail_fast: self.fail_fast }
    }
}

impl<S: ?Sized> Default for Validator<S> {
    fn default() -> Self {
        Self::none()
    }
}

impl<S: ?Sized> fmt::Debug for Validator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Rules<'a, S: ?Sized>(&'a [Rule<S>]);

        impl<S: ?Sized> fmt::Debug for Rules<'_, S> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries(self.0.iter().map(|rule| (rule.kind(), rule.field())))
                    .finish()
            }
        }

        f.debug_struct("Validator")
            .field("rules", &Rules(&self.rules))
            .field("fail_fast", &self.fail_fast)
            .finish()
    }
}
