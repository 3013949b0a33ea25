//! Selectable courses listed on the registration form.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Validation errors for course values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseValidationError {
    #[error("course id must not be empty")]
    EmptyId,
    #[error("course label must not be empty")]
    EmptyLabel,
}

/// Document identifier of a course in the catalogue store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "rust-101")]
pub struct CourseId(String);

impl CourseId {
    /// Validate and construct a [`CourseId`].
    pub fn new(id: impl Into<String>) -> Result<Self, CourseValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CourseValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CourseId> for String {
    fn from(value: CourseId) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseId {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A course offered for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    id: CourseId,
    #[schema(example = "Intro to Rust")]
    label: String,
}

impl Course {
    /// Build a course, rejecting a blank label.
    pub fn new(id: CourseId, label: impl Into<String>) -> Result<Self, CourseValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(CourseValidationError::EmptyLabel);
        }
        Ok(Self { id, label })
    }

    /// Catalogue identifier.
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    /// Text shown next to the checkbox.
    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn blank_ids_are_rejected(#[case] raw: &str) {
        assert_eq!(CourseId::new(raw), Err(CourseValidationError::EmptyId));
    }

    #[rstest]
    fn blank_labels_are_rejected() {
        let id = CourseId::new("rust-101").expect("valid id");
        assert_eq!(Course::new(id, " "), Err(CourseValidationError::EmptyLabel));
    }

    #[rstest]
    fn course_id_deserialises_from_string() {
        let id: CourseId = serde_json::from_value(serde_json::json!("rust-101")).expect("id");
        assert_eq!(id.as_ref(), "rust-101");
        assert!(serde_json::from_value::<CourseId>(serde_json::json!("")).is_err());
    }
}
