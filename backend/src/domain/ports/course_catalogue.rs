//! Read-side port listing the selectable courses.

use async_trait::async_trait;

use crate::domain::{Course, CourseId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading the catalogue.
    pub enum CourseCatalogueError {
        /// The store could not be reached.
        Connection { message: String } =>
            "course catalogue connection failed: {message}",
        /// The store answered with something that is not a course list.
        Decode { message: String } =>
            "course catalogue returned an unreadable listing: {message}",
    }
}

/// Port for fetching the course list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogue: Send + Sync {
    /// Every course offered, in display order.
    async fn list_courses(&self) -> Result<Vec<Course>, CourseCatalogueError>;
}

/// Catalogue serving a small built-in list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseCatalogue;

const FIXTURE_COURSES: [(&str, &str); 3] = [
    ("frontend", "Front-end Development"),
    ("backend", "Back-end Development"),
    ("data", "Data Engineering"),
];

#[async_trait]
impl CourseCatalogue for FixtureCourseCatalogue {
    async fn list_courses(&self) -> Result<Vec<Course>, CourseCatalogueError> {
        FIXTURE_COURSES
            .into_iter()
            .map(|(id, label)| {
                CourseId::new(id)
                    .and_then(|id| Course::new(id, label))
                    .map_err(|err| CourseCatalogueError::decode(err.to_string()))
            })
            .collect()
    }
}
