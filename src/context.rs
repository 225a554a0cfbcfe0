//! The path threaded through every recursive descent, describing where in a
//! composite value the current sub-validation is happening.

use std::fmt;
use std::sync::Arc;

/// One step of a [`Context`] path: the key taken to reach this point, and the
/// name of the validator responsible for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextEntry {
    pub key: Arc<str>,
    pub name: Arc<str>,
}

impl ContextEntry {
    pub fn new(key: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        ContextEntry {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// An ordered, append-only path of [`ContextEntry`] describing location
/// within a composite input.
///
/// A `Context` is immutable from the perspective of sibling branches: every
/// descent produces a fresh extended context via [`Context::push`] rather
/// than mutating the parent's entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    entries: Arc<Vec<ContextEntry>>,
}

impl Context {
    /// Seeds a context for a top-level `validate` call: a single entry with
    /// an empty key and the root validator's name.
    pub fn root(type_name: impl Into<Arc<str>>) -> Self {
        Context {
            entries: Arc::new(vec![ContextEntry::new("", type_name)]),
        }
    }

    /// Returns a new context with `entry` appended. Never mutates `self`.
    pub fn push(&self, entry: ContextEntry) -> Self {
        let mut entries = (*self.entries).clone();
        entries.push(entry);
        Context {
            entries: Arc::new(entries),
        }
    }

    /// Convenience: `push(ContextEntry::new(key, name))`.
    pub fn descend(&self, key: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        self.push(ContextEntry::new(key, name))
    }

    pub fn entries(&self) -> &[ContextEntry] {
        &self.entries
    }

    /// `entries.map(e => e.key + ": " + e.name).join("/")`.
    pub fn path(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}: {}", e.key, e.name))
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
