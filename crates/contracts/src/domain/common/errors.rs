use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// A value of the wrong kind was offered to a draft field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` does not accept a {given} value")]
pub struct FieldTypeMismatch {
    pub field: &'static str,
    pub given: &'static str,
}

/// Per-field validation messages for one entity draft.
///
/// An absent entry and an empty-string entry both mean "no error for this
/// field"; per-field success writes an empty string rather than removing the
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors<F: Copy + Eq + Hash> {
    entries: HashMap<F, String>,
}

impl<F: Copy + Eq + Hash> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn set(&mut self, field: F, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Record "validated clean" for one field.
    pub fn clear(&mut self, field: F) {
        self.entries.insert(field, String::new());
    }

    /// The message for a field, if it currently has an error.
    pub fn message(&self, field: F) -> Option<&str> {
        self.entries
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        self.entries.values().any(|m| !m.is_empty())
    }

    pub fn error_count(&self) -> usize {
        self.entries.values().filter(|m| !m.is_empty()).count()
    }

    /// Fields that currently have an error, with their messages.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.entries
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(field, m)| (*field, m.as_str()))
    }
}

impl<F: Copy + Eq + Hash> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}
