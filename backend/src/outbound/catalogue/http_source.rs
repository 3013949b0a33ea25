//! Reqwest-backed course catalogue.
//!
//! Reads the `courses` collection through the document store's REST listing
//! endpoint. Transport concerns only: timeout, status mapping and decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::ListDocumentsDto;
use crate::domain::Course;
use crate::domain::ports::{CourseCatalogue, CourseCatalogueError};

/// Catalogue adapter issuing one GET per listing.
pub struct HttpCourseCatalogue {
    client: Client,
    endpoint: Url,
}

impl HttpCourseCatalogue {
    /// Build an adapter whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl CourseCatalogue for HttpCourseCatalogue {
    async fn list_courses(&self) -> Result<Vec<Course>, CourseCatalogueError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| CourseCatalogueError::connection(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| CourseCatalogueError::connection(err.to_string()))?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }
        debug!(bytes = body.len(), "course listing received");
        parse_courses(body.as_ref())
    }
}

fn parse_courses(body: &[u8]) -> Result<Vec<Course>, CourseCatalogueError> {
    let decoded: ListDocumentsDto = serde_json::from_slice(body).map_err(|error| {
        CourseCatalogueError::decode(format!("invalid course listing JSON: {error}"))
    })?;
    decoded.into_courses().map_err(CourseCatalogueError::decode)
}

fn map_status_error(status: StatusCode) -> CourseCatalogueError {
    CourseCatalogueError::connection(format!("status {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_documents_into_courses() {
        let body = r#"{
            "documents": [
                {
                    "name": "projects/demo/databases/(default)/documents/courses/frontend",
                    "fields": { "course": { "stringValue": "Front-end Development" } },
                    "createTime": "2022-03-01T10:00:00Z"
                },
                {
                    "name": "projects/demo/databases/(default)/documents/courses/data",
                    "fields": { "course": { "stringValue": "Data Engineering" } }
                }
            ]
        }"#;

        let courses = parse_courses(body.as_bytes()).expect("listing decodes");
        let pairs: Vec<_> = courses
            .iter()
            .map(|course| (course.id().as_ref().to_owned(), course.label().to_owned()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("frontend".to_owned(), "Front-end Development".to_owned()),
                ("data".to_owned(), "Data Engineering".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_collection_yields_no_courses() {
        let courses = parse_courses(b"{}").expect("empty listing decodes");
        assert!(courses.is_empty());
    }

    #[rstest]
    #[case::not_json("<html>")]
    #[case::missing_label(r#"{"documents":[{"name":"a/courses/x","fields":{}}]}"#)]
    #[case::blank_label(
        r#"{"documents":[{"name":"a/courses/x","fields":{"course":{"stringValue":""}}}]}"#
    )]
    #[case::trailing_slash(
        r#"{"documents":[{"name":"a/courses/","fields":{"course":{"stringValue":"X"}}}]}"#
    )]
    fn malformed_listings_are_decode_errors(#[case] body: &str) {
        let error = parse_courses(body.as_bytes()).expect_err("listing must be rejected");
        assert!(matches!(error, CourseCatalogueError::Decode { .. }));
    }

    #[test]
    fn failed_statuses_are_connection_errors() {
        let error = map_status_error(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error, CourseCatalogueError::connection("status 503"));
    }
}
