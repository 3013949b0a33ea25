//! Per-field input state.
//!
//! Every status change goes through [`FormState::settle`], which records the
//! outcome of a schema validation. Nothing clears an error any other way, so
//! a field shows an error exactly when its last validation failed.

use std::collections::BTreeMap;

use super::field::FieldName;
use super::schema::{FieldError, FieldSchema};

/// Validation status of a field.
///
/// `Untouched` is only ever the initial state; once validated a field moves
/// between `Valid` and `Invalid` and never returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

/// Who last wrote a field's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldOrigin {
    #[default]
    Empty,
    /// Seeded from an identity snapshot.
    Identity,
    /// Typed by the user.
    User,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldEntry {
    value: String,
    status: FieldStatus,
    origin: FieldOrigin,
}

/// Current value, status, and origin of every form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    entries: BTreeMap<FieldName, FieldEntry>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            entries: FieldName::ALL
                .into_iter()
                .map(|field| (field, FieldEntry::default()))
                .collect(),
        }
    }
}

impl FormState {
    /// All fields empty and untouched.
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, field: FieldName) -> Option<&FieldEntry> {
        self.entries.get(&field)
    }

    fn entry_mut(&mut self, field: FieldName) -> &mut FieldEntry {
        self.entries.entry(field).or_default()
    }

    /// Registered value of `field`.
    pub fn value(&self, field: FieldName) -> &str {
        self.entry(field).map_or("", |entry| entry.value.as_str())
    }

    /// Validation status of `field`.
    pub fn status(&self, field: FieldName) -> FieldStatus {
        self.entry(field)
            .map(|entry| entry.status.clone())
            .unwrap_or_default()
    }

    /// Error message currently shown for `field`, if any.
    pub fn error(&self, field: FieldName) -> Option<&str> {
        match self.entry(field).map(|entry| &entry.status) {
            Some(FieldStatus::Invalid(message)) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Who last wrote `field`.
    pub fn origin(&self, field: FieldName) -> FieldOrigin {
        self.entry(field).map(|entry| entry.origin).unwrap_or_default()
    }

    /// Every field currently in error, in form order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.entries
            .iter()
            .filter_map(|(field, entry)| match &entry.status {
                FieldStatus::Invalid(message) => Some(FieldError::new(*field, message.clone())),
                _ => None,
            })
            .collect()
    }

    /// Store `value` for `field`, then validate it.
    pub(crate) fn write(
        &mut self,
        schema: &FieldSchema,
        field: FieldName,
        value: impl Into<String>,
        origin: FieldOrigin,
    ) -> Result<(), FieldError> {
        let entry = self.entry_mut(field);
        entry.value = value.into();
        entry.origin = origin;
        let result = schema.validate(field, &entry.value);
        self.settle(field, &result);
        result
    }

    /// Record the outcome of a validation pass for `field`.
    pub(crate) fn settle(&mut self, field: FieldName, result: &Result<(), FieldError>) {
        self.entry_mut(field).status = match result {
            Ok(()) => FieldStatus::Valid,
            Err(error) => FieldStatus::Invalid(error.message().to_owned()),
        };
    }
}
