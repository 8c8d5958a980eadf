use std::collections::BTreeMap;

use super::FieldId;

/// Current error message per invalid field.
///
/// Keyed by [`FieldId`] in an ordered map, so every lookup that asks for the
/// "first" error resolves by canonical field order rather than by when the
/// error was recorded.
///
/// The store is plain data. Keeping it in step with what the user sees is the
/// job of [`super::FieldController`], which updates both in the same call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStore {
    errors: BTreeMap<FieldId, String>,
}

impl ErrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the error for `field`.
    pub fn set_error(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Remove the error for `field`. Returns false if there was none.
    pub fn clear_error(&mut self, field: FieldId) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn has_any_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Earliest field in canonical order that currently has an error.
    pub fn first_error_field(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }

    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}
