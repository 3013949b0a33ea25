//! Registration form endpoints.
//!
//! ```text
//! POST /api/v1/registration/validate  Validate one field
//! POST /api/v1/registration           Submit the whole form
//! ```
//!
//! Each submission drives a fresh [`RegistrationForm`]: the identity
//! snapshot is applied first, then the typed fields as user edits, so typed
//! values always win over identity seeds.

use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::ChallengeHandle;
use crate::domain::{
    CourseId, Error, FieldName, FormStep, IdentitySnapshot, RegistrationForm, SubmissionOutcome,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Single-field validation request.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateFieldRequest {
    /// Wire name of the field, e.g. `nationalId`.
    #[schema(example = "nationalId")]
    pub field: String,
    #[serde(default)]
    #[schema(example = "12345")]
    pub value: String,
}

/// Outcome of validating one field.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateFieldResponse {
    pub field: FieldName,
    /// Label shown next to the input.
    #[schema(example = "National ID")]
    pub label: String,
    pub valid: bool,
    /// First failing rule's message.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Must be exactly 14 digits")]
    pub message: Option<String>,
}

/// Full form submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Typed values keyed by wire name. Missing fields count as empty.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// Selected course identifiers.
    #[serde(default)]
    pub courses: Vec<CourseId>,
    /// Identity of the signed-in user, if any.
    #[serde(default)]
    pub identity: Option<IdentitySnapshot>,
}

/// Where the flow stands after a submission.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub step: FormStep,
    /// Pending phone challenge once verification has started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<ChallengeHandle>,
}

fn parse_field(name: &str) -> Result<FieldName, Error> {
    name.parse::<FieldName>()
        .map_err(|err| Error::invalid_request(err.to_string()).with_details(json!({ "field": name })))
}

/// Validate a single field against the registration rules.
#[utoipa::path(
    post,
    path = "/api/v1/registration/validate",
    request_body = ValidateFieldRequest,
    responses(
        (status = 200, description = "Validation outcome", body = ValidateFieldResponse),
        (status = 400, description = "Unknown field", body = Error)
    ),
    tags = ["registration"],
    operation_id = "validateField"
)]
#[post("/registration/validate")]
pub async fn validate_field(
    state: web::Data<HttpState>,
    payload: web::Json<ValidateFieldRequest>,
) -> ApiResult<HttpResponse> {
    let ValidateFieldRequest { field, value } = payload.into_inner();
    let field = parse_field(&field)?;
    let outcome = state.schema.validate(field, &value);
    let response = ValidateFieldResponse {
        field,
        label: field.label().to_owned(),
        valid: outcome.is_ok(),
        message: outcome.err().map(|err| err.message().to_owned()),
    };
    Ok(HttpResponse::Ok().json(response))
}

/// Submit the registration form.
///
/// - `400 Bad Request`: a field failed validation (messages under
///   `details.fields`), a field name is unknown, or a course is not offered.
/// - `503 Service Unavailable`: courses were selected but the catalogue could
///   not be read. Nothing is forwarded.
/// - `202 Accepted`: data forwarded and phone verification started.
/// - `200 OK`: data forwarded but verification could not start; the form
///   stays on the registration step.
#[utoipa::path(
    post,
    path = "/api/v1/registration",
    request_body = RegistrationRequest,
    responses(
        (status = 202, description = "Verification started", body = RegistrationResponse),
        (status = 200, description = "Data forwarded; still on the registration step", body = RegistrationResponse),
        (status = 400, description = "Invalid form", body = Error),
        (status = 503, description = "Course catalogue unavailable", body = Error)
    ),
    tags = ["registration"],
    operation_id = "submitRegistration"
)]
#[post("/registration")]
pub async fn submit_registration(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationRequest>,
) -> ApiResult<HttpResponse> {
    let RegistrationRequest {
        fields,
        courses,
        identity,
    } = payload.into_inner();

    let mut form = RegistrationForm::new(Arc::clone(&state.schema));
    form.reconcile_identity(identity.as_ref());
    for (name, value) in fields {
        let field = parse_field(&name)?;
        // Failures are collected by the submit pass below.
        let _ = form.input(field, value);
    }

    if !courses.is_empty() {
        // The load already logged the failure.
        form.load_courses(state.catalogue.as_ref())
            .await
            .map_err(|_| Error::service_unavailable("Course catalogue unavailable"))?;
        for id in &courses {
            form.select_course(id, true).map_err(|err| {
                Error::invalid_request(err.to_string()).with_details(json!({ "courses": [id] }))
            })?;
        }
    }

    match form.submit(&state.pipeline).await {
        SubmissionOutcome::Rejected { errors } => Err(Error::invalid_fields(&errors)),
        SubmissionOutcome::Advanced { challenge } => {
            info!(verification_id = challenge.verification_id(), "registration advanced");
            Ok(HttpResponse::Accepted().json(RegistrationResponse {
                step: form.step(),
                challenge: Some(challenge),
            }))
        }
        SubmissionOutcome::Stalled => Ok(HttpResponse::Ok().json(RegistrationResponse {
            step: form.step(),
            challenge: None,
        })),
    }
}

#[cfg(test)]
mod tests;
