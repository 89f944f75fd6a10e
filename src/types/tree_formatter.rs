//! Error tree rendering utilities.

use crate::types::alloc_type::{String, ToString, Vec};
use crate::types::error_tree::join_path;
use crate::types::ErrorTree;

/// Trait for customizing how an [`ErrorTree`] is rendered.
///
/// The default methods produce the flat layout: one `path: message` entry per message,
/// entries separated by [`entry_separator`](TreeFormatter::entry_separator).
pub trait TreeFormatter {
    fn path_separator(&self) -> &str {
        "."
    }

    fn entry_separator(&self) -> &str {
        "\n"
    }

    fn format_entry(&self, path: &str, message: &str) -> String {
        let mut entry = String::with_capacity(path.len() + message.len() + 2);
        if !path.is_empty() {
            entry.push_str(path);
            entry.push_str(": ");
        }
        entry.push_str(message);
        entry
    }

    fn format_tree(&self, tree: &ErrorTree) -> String {
        let mut entries = Vec::new();
        tree.walk(&mut Vec::new(), &mut |path, message| {
            entries.push(self.format_entry(&join_path(path, self.path_separator()), message));
        });
        entries.join(self.entry_separator())
    }
}

/// Configuration-based tree formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeFormatConfig {
    pub path_separator: String,
    pub entry_separator: String,
    pub path_suffix: String,
    pub root_prefix: Option<String>,
    pub nested: bool,
    pub indent: String,
    pub bullet: String,
}

impl Default for TreeFormatConfig {
    fn default() -> Self {
        Self {
            path_separator: ".".into(),
            entry_separator: "\n".into(),
            path_suffix: ": ".into(),
            root_prefix: None,
            nested: false,
            indent: "  ".into(),
            bullet: "- ".into(),
        }
    }
}

impl TreeFormatConfig {
    /// Indented layout: one line per field, messages as bullets below their field.
    #[inline]
    pub fn pretty() -> Self {
        Self { nested: true, ..Default::default() }
    }

    /// Single-line layout, entries joined by `"; "`.
    #[inline]
    pub fn compact() -> Self {
        Self { entry_separator: "; ".into(), ..Default::default() }
    }

    /// Flat layout with every path rooted under `label`.
    #[inline]
    pub fn rooted(label: impl Into<String>) -> Self {
        Self { root_prefix: Some(label.into()), ..Default::default() }
    }

    fn format_nested(&self, tree: &ErrorTree, depth: usize, lines: &mut Vec<String>) {
        for message in tree.messages() {
            let mut line = self.indent.repeat(depth);
            line.push_str(&self.bullet);
            line.push_str(message);
            lines.push(line);
        }
        for (key, child) in tree.field_errors() {
            let mut line = self.indent.repeat(depth);
            line.push_str(&key.to_string());
            line.push_str(self.path_suffix.trim_end());
            lines.push(line);
            self.format_nested(child, depth + 1, lines);
        }
    }
}

impl TreeFormatter for TreeFormatConfig {
    fn path_separator(&self) -> &str {
        &self.path_separator
    }

    fn entry_separator(&self) -> &str {
        &self.entry_separator
    }

    fn format_entry(&self, path: &str, message: &str) -> String {
        let mut entry = String::new();
        if let Some(root) = &self.root_prefix {
            entry.push_str(root);
            if !path.is_empty() {
                entry.push_str(&self.path_separator);
            }
        }
        entry.push_str(path);
        if !entry.is_empty() {
            entry.push_str(&self.path_suffix);
        }
        entry.push_str(message);
        entry
    }

    fn format_tree(&self, tree: &ErrorTree) -> String {
        if !self.nested {
            let mut entries = Vec::new();
            tree.walk(&mut Vec::new(), &mut |path, message| {
                entries.push(self.format_entry(&join_path(path, &self.path_separator), message));
            });
            return entries.join(&self.entry_separator);
        }

        let mut lines = Vec::new();
        if let Some(root) = &self.root_prefix {
            if tree.has_error() {
                let mut line = root.clone();
                line.push_str(self.path_suffix.trim_end());
                lines.push(line);
            }
            self.format_nested(tree, 1, &mut lines);
        } else {
            self.format_nested(tree, 0, &mut lines);
        }
        lines.join("\n")
    }
}
