//! The error-tree algebra.
//!
//! An [`ErrorTree`] is either empty ("no error") or a node carrying the identity of the
//! rejected value, a set of messages and a map of field errors. Trees form a commutative
//! monoid under [`ErrorTree::try_plus`] with [`ErrorTree::none`] as identity, as long as
//! the operands describe the same subject.

use crate::types::alloc_type::{btree_map, BTreeMap, Box, String, Vec};
use crate::types::tree_formatter::{TreeFormatConfig, TreeFormatter};
use crate::types::{ErrorVec, FieldKey, MismatchedSubject, RejectedValue};
use core::fmt::{self, Display};
use core::ops::Add;
use smallvec::smallvec;

/// Structured validation report mirroring the field structure of the validated subject.
///
/// Every constructor and combination collapses results that carry no information to the
/// empty tree, so [`has_error`](ErrorTree::has_error) never has to inspect contents and an
/// empty node can never be observed.
///
/// # Examples
///
/// ```
/// use valid_rail::ErrorTree;
///
/// let name = String::from("");
/// let report = ErrorTree::scope("name", ErrorTree::leaf_of(&name, "must not be empty"))
///     .plus(ErrorTree::scope("age", ErrorTree::none()));
///
/// assert!(report.has_error());
/// assert_eq!(report.field_errors().count(), 1);
/// assert_eq!(report.to_string(), "name: must not be empty");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorTree {
    node: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    rejected: Option<RejectedValue>,
    // sorted and deduplicated
    messages: ErrorVec<String>,
    // never holds an empty tree
    fields: BTreeMap<FieldKey, ErrorTree>,
}

impl ErrorTree {
    /// The canonical empty tree.
    pub const NONE: ErrorTree = ErrorTree { node: None };

    /// Returns the empty tree, meaning "no error".
    #[inline]
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Creates a tree holding a single message about `rejected`.
    ///
    /// A leaf with no rejected value and a blank message has nothing to say and collapses
    /// to [`ErrorTree::none`].
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ErrorTree;
    ///
    /// assert!(!ErrorTree::leaf(None, "   ").has_error());
    /// assert!(ErrorTree::leaf(None, "required").has_error());
    /// ```
    pub fn leaf<M: Into<String>>(rejected: Option<RejectedValue>, message: M) -> Self {
        let message = message.into();
        if rejected.is_none() && message.trim().is_empty() {
            return Self::none();
        }
        Self {
            node: Some(Box::new(Node {
                rejected,
                messages: smallvec![message],
                fields: BTreeMap::new(),
            })),
        }
    }

    /// Creates a leaf whose rejected value is the identity of `value`.
    #[inline]
    pub fn leaf_of<T: ?Sized, M: Into<String>>(value: &T, message: M) -> Self {
        Self::leaf(Some(RejectedValue::of(value)), message)
    }

    /// Nests `child` under `key`.
    ///
    /// Scoping an empty tree yields the empty tree, so no empty branch is ever introduced.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ErrorTree;
    ///
    /// assert_eq!(ErrorTree::scope("items", ErrorTree::none()), ErrorTree::none());
    ///
    /// let scoped = ErrorTree::scope("items", ErrorTree::leaf(None, "too many"));
    /// assert_eq!(scoped.field("items").unwrap().messages(), ["too many"]);
    /// ```
    pub fn scope<K: Into<FieldKey>>(key: K, child: ErrorTree) -> Self {
        if !child.has_error() {
            return Self::none();
        }
        let mut fields = BTreeMap::new();
        fields.insert(key.into(), child);
        Self {
            node: Some(Box::new(Node {
                rejected: None,
                messages: ErrorVec::new(),
                fields,
            })),
        }
    }

    /// Roots a finished report under a descriptive label. Identical to [`ErrorTree::scope`].
    #[inline]
    pub fn wrap<K: Into<FieldKey>>(name: K, tree: ErrorTree) -> Self {
        Self::scope(name, tree)
    }

    /// Method form of [`ErrorTree::wrap`].
    #[inline]
    pub fn wrapped<K: Into<FieldKey>>(self, name: K) -> Self {
        Self::scope(name, self)
    }

    /// Combines two trees, failing if they describe different rejected values.
    ///
    /// Messages are unioned and field errors are merged key by key, recursively.
    ///
    /// # Errors
    ///
    /// Returns [`MismatchedSubject`] when both trees, or any pair of trees merged under the
    /// same path, carry different rejected-value identities.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ErrorTree;
    ///
    /// let value = 5;
    /// let other = 6;
    /// let a = ErrorTree::leaf_of(&value, "too small");
    /// let b = ErrorTree::leaf_of(&value, "odd");
    ///
    /// let merged = a.clone().try_plus(b).unwrap();
    /// assert_eq!(merged.messages(), ["odd", "too small"]);
    ///
    /// assert!(a.try_plus(ErrorTree::leaf_of(&other, "odd")).is_err());
    /// ```
    pub fn try_plus(self, other: ErrorTree) -> Result<Self, MismatchedSubject> {
        let (mut left, right) = match (self.node, other.node) {
            (None, node) | (node, None) => return Ok(Self { node }),
            (Some(left), Some(right)) => (left, right),
        };

        let right = *right;
        left.rejected = match (left.rejected.take(), right.rejected) {
            (Some(l), Some(r)) if l != r => return Err(MismatchedSubject::new(l, r)),
            (l, r) => l.or(r),
        };

        left.messages.extend(right.messages);
        left.messages.sort_unstable();
        left.messages.dedup();

        for (key, child) in right.fields {
            match left.fields.entry(key) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(child);
                }
                btree_map::Entry::Occupied(mut slot) => {
                    let existing = core::mem::take(slot.get_mut());
                    *slot.get_mut() = existing.try_plus(child)?;
                }
            }
        }

        Ok(Self { node: Some(left) })
    }

    /// Combines two trees.
    ///
    /// # Panics
    ///
    /// Panics with the [`MismatchedSubject`] message if the trees describe different
    /// rejected values. Use [`ErrorTree::try_plus`] to handle that case.
    pub fn plus(self, other: ErrorTree) -> Self {
        match self.try_plus(other) {
            Ok(tree) => tree,
            Err(mismatch) => panic!("{}", mismatch),
        }
    }

    /// Folds any number of trees with [`ErrorTree::try_plus`].
    ///
    /// # Errors
    ///
    /// Returns the first [`MismatchedSubject`] encountered.
    pub fn concat<I>(trees: I) -> Result<Self, MismatchedSubject>
    where
        I: IntoIterator<Item = ErrorTree>,
    {
        trees.into_iter().try_fold(Self::none(), Self::try_plus)
    }

    /// Returns `true` unless this is the empty tree.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.node.is_some()
    }

    /// Returns `true` for the empty tree.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.node.is_none()
    }

    /// Identity of the value rejected at this level, if any.
    #[inline]
    pub fn rejected_value(&self) -> Option<RejectedValue> {
        self.node.as_ref().and_then(|node| node.rejected.clone())
    }

    /// Messages attached directly to this level, sorted.
    #[inline]
    pub fn messages(&self) -> &[String] {
        match &self.node {
            Some(node) => &node.messages,
            None => &[],
        }
    }

    /// Field errors directly below this level, in key order.
    pub fn field_errors(&self) -> impl Iterator<Item = (&FieldKey, &ErrorTree)> {
        self.node.iter().flat_map(|node| node.fields.iter())
    }

    /// Looks up the child tree stored under `key`.
    pub fn get(&self, key: &FieldKey) -> Option<&ErrorTree> {
        self.node.as_ref().and_then(|node| node.fields.get(key))
    }

    /// Looks up the child tree stored under the key that renders as `name`.
    ///
    /// `field("0")` and `element(0)` address the same child.
    pub fn field(&self, name: &str) -> Option<&ErrorTree> {
        self.field_errors().find(|(key, _)| key.matches(name)).map(|(_, child)| child)
    }

    /// Looks up the child tree of a sequence element.
    pub fn element(&self, index: usize) -> Option<&ErrorTree> {
        self.get(&FieldKey::index(index))
    }

    /// Flattens the tree into `(path, message)` pairs, paths joined with `.`.
    ///
    /// Messages at the root have an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ErrorTree;
    ///
    /// let tree = ErrorTree::scope(
    ///     "items",
    ///     ErrorTree::scope(2usize, ErrorTree::leaf(None, "missing name")),
    /// );
    /// assert_eq!(tree.paths(), vec![("items.2".to_string(), "missing name")]);
    /// ```
    pub fn paths(&self) -> Vec<(String, &str)> {
        let mut entries = Vec::new();
        self.walk(&mut Vec::new(), &mut |path, message| {
            entries.push((join_path(path, "."), message));
        });
        entries
    }

    /// Converts the tree into a `Result`, treating the empty tree as success.
    ///
    /// # Errors
    ///
    /// Returns the tree itself when it holds at least one error.
    #[inline]
    pub fn into_result(self) -> Result<(), ErrorTree> {
        if self.has_error() {
            Err(self)
        } else {
            Ok(())
        }
    }

    /// Renders the tree with a custom formatter.
    #[must_use]
    pub fn render_with<F: TreeFormatter>(&self, formatter: &F) -> String {
        formatter.format_tree(self)
    }

    /// Replaces the rejected value at this level, if one is set.
    pub(crate) fn reidentified(mut self, rejected: RejectedValue) -> Self {
        if let Some(node) = self.node.as_mut() {
            if node.rejected.is_some() {
                node.rejected = Some(rejected);
            }
        }
        self
    }

    /// Depth-first visit of every message together with the path leading to it.
    pub(crate) fn walk<'a, F>(&'a self, path: &mut Vec<&'a FieldKey>, visit: &mut F)
    where
        F: FnMut(&[&'a FieldKey], &'a str),
    {
        let Some(node) = &self.node else {
            return;
        };
        for message in node.messages.iter() {
            visit(path, message);
        }
        for (key, child) in node.fields.iter() {
            path.push(key);
            child.walk(path, visit);
            path.pop();
        }
    }
}

/// Joins path segments with `separator`.
///
/// Names that are empty, contain the separator or start with a quote are written in
/// double quotes with `"` and `\` escaped, so distinct paths never render alike.
pub(crate) fn join_path(path: &[&FieldKey], separator: &str) -> String {
    use core::fmt::Write;

    let mut joined = String::new();
    for (i, key) in path.iter().enumerate() {
        if i > 0 {
            joined.push_str(separator);
        }
        match key.as_name() {
            Some(name) if needs_quotes(name, separator) => {
                joined.push('"');
                for c in name.chars() {
                    if c == '"' || c == '\\' {
                        joined.push('\\');
                    }
                    joined.push(c);
                }
                joined.push('"');
            }
            _ => {
                let _ = write!(joined, "{}", key);
            }
        }
    }
    joined
}

fn needs_quotes(name: &str, separator: &str) -> bool {
    name.is_empty() || name.starts_with('"') || (!separator.is_empty() && name.contains(separator))
}

impl From<Option<ErrorTree>> for ErrorTree {
    #[inline]
    fn from(tree: Option<ErrorTree>) -> Self {
        tree.unwrap_or_default()
    }
}

impl Add for ErrorTree {
    type Output = ErrorTree;

    /// See [`ErrorTree::plus`]; panics on mismatched subjects.
    #[inline]
    fn add(self, other: ErrorTree) -> ErrorTree {
        self.plus(other)
    }
}

impl Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&TreeFormatConfig::pretty().format_tree(self))
        } else {
            f.write_str(&TreeFormatConfig::default().format_tree(self))
        }
    }
}

impl core::error::Error for ErrorTree {}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ErrorTree;
    use crate::types::FieldKey;
    use serde::ser::{SerializeMap, SerializeStruct};
    use serde::{Serialize, Serializer};

    impl Serialize for FieldKey {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct Fields<'a>(&'a ErrorTree);

    impl Serialize for Fields<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(None)?;
            for (key, child) in self.0.field_errors() {
                map.serialize_entry(key, child)?;
            }
            map.end()
        }
    }

    /// Serialized as `{ "messages": [..], "fields": { key: tree, .. } }`.
    ///
    /// Rejected-value identities are process-local and are not serialized.
    impl Serialize for ErrorTree {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("ErrorTree", 2)?;
            state.serialize_field("messages", self.messages())?;
            state.serialize_field("fields", &Fields(self))?;
            state.end()
        }
    }
}
