//! DTOs for the document store's REST listing of the `courses` collection.
//!
//! ```json
//! { "documents": [
//!   { "name": "projects/p/databases/(default)/documents/courses/frontend",
//!     "fields": { "course": { "stringValue": "Front-end Development" } } }
//! ] }
//! ```
//!
//! An empty collection is returned as `{}`.

use serde::Deserialize;

use crate::domain::{Course, CourseId};

#[derive(Debug, Deserialize)]
pub(super) struct ListDocumentsDto {
    #[serde(default)]
    pub(super) documents: Vec<DocumentDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DocumentDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) fields: CourseFieldsDto,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CourseFieldsDto {
    pub(super) course: Option<StringValueDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StringValueDto {
    pub(super) string_value: String,
}

impl ListDocumentsDto {
    pub(super) fn into_courses(self) -> Result<Vec<Course>, String> {
        self.documents
            .into_iter()
            .map(DocumentDto::into_course)
            .collect()
    }
}

impl DocumentDto {
    fn into_course(self) -> Result<Course, String> {
        let id = self
            .name
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| format!("document name {:?} has no identifier", self.name))?;
        let label = self
            .fields
            .course
            .ok_or_else(|| format!("document {id} has no course label"))?
            .string_value;
        let id = CourseId::new(id).map_err(|err| format!("document {id}: {err}"))?;
        Course::new(id, label).map_err(|err| format!("document {}: {err}", self.name))
    }
}
