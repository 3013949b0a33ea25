//! OpenAPI documentation for the registration API.
//!
//! Served through Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::ports::ChallengeHandle;
use crate::domain::{Course, CourseId, Error, ErrorCode, FieldName, FormStep, IdentitySnapshot};
use crate::inbound::http::registration::{
    RegistrationRequest, RegistrationResponse, ValidateFieldRequest, ValidateFieldResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration form API",
        description = "Course listing, field validation and registration submission."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::registration::validate_field,
        crate::inbound::http::registration::submit_registration,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ChallengeHandle,
        Course,
        CourseId,
        Error,
        ErrorCode,
        FieldName,
        FormStep,
        IdentitySnapshot,
        RegistrationRequest,
        RegistrationResponse,
        ValidateFieldRequest,
        ValidateFieldResponse,
    )),
    tags(
        (name = "registration", description = "Registration form operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api/v1/courses")]
    #[case("/api/v1/registration")]
    #[case("/api/v1/registration/validate")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "{path} is undocumented");
    }

    #[rstest]
    fn registers_the_error_schema() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components present").schemas;
        assert!(schemas.contains_key("Error"));
        assert!(schemas.contains_key("ValidateFieldResponse"));
    }
}
