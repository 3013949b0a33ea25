//! Handler tests for the registration endpoints.

use super::*;
use crate::domain::FieldSchema;
use crate::domain::ports::{
    CourseCatalogueError, MockCourseCatalogue, MockPhoneChallenge, PhoneChallengeError,
};
use crate::inbound::http::state::HttpStatePorts;
use crate::outbound::memory::{InMemoryChallengeResultSink, InMemoryRegistrationSink};
use actix_web::http::StatusCode;
use actix_web::{App, test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct Harness {
    registrations: Arc<InMemoryRegistrationSink>,
    challenge_results: Arc<InMemoryChallengeResultSink>,
    state: HttpState,
}

/// Wire `ports` with in-memory sinks that the test can inspect.
fn harness_with(ports: HttpStatePorts) -> Harness {
    let registrations = Arc::new(InMemoryRegistrationSink::new());
    let challenge_results = Arc::new(InMemoryChallengeResultSink::new());
    let ports = HttpStatePorts {
        registrations: registrations.clone(),
        challenge_results: challenge_results.clone(),
        ..ports
    };
    Harness {
        registrations,
        challenge_results,
        state: HttpState::new(Arc::new(FieldSchema::default()), ports),
    }
}

#[fixture]
fn harness() -> Harness {
    harness_with(HttpStatePorts::default())
}

fn valid_fields() -> Value {
    json!({
        "firstName": "Jane",
        "middleName": "Marie",
        "lastName": "Doe",
        "phone": "+201001234567",
        "nationalId": "29001011234567",
        "email": "jane@example.com",
        "address1": "12 Nile Street",
        "linkedIn": "https://uk.linkedin.com/in/jane",
        "twitter": "https://twitter.com/jane_doe",
        "facebook": "https://www.facebook.com/jane.doe"
    })
}

async fn post(state: &HttpState, uri: &str, body: Value) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new().app_data(web::Data::new(state.clone())).service(
            web::scope("/api/v1")
                .service(validate_field)
                .service(submit_registration),
        ),
    )
    .await;
    let request = test::TestRequest::post().uri(uri).set_json(body).to_request();
    let response = test::call_service(&app, request).await;
    let status = response.status();
    (status, test::read_body_json(response).await)
}

#[rstest]
#[case("nationalId", "12345", "National ID", false, Some("Must be exactly 14 digits"))]
#[case("nationalId", "12a45", "National ID", false, Some("Must be only digits"))]
#[case("linkedIn", "https://www.linkedin.com/in/x", "LinkedIn Profile Link", true, None)]
#[case(
    "linkedIn",
    "http://www.linkedin.com/in/x",
    "LinkedIn Profile Link",
    false,
    Some("Must be a valid LinkedIn link")
)]
#[case("firstName", "", "First Name", false, Some("First name is required"))]
#[case("address2", "", "Address 2", true, None)]
#[actix_web::test]
async fn validates_one_field(
    harness: Harness,
    #[case] field: &str,
    #[case] value: &str,
    #[case] label: &str,
    #[case] valid: bool,
    #[case] message: Option<&str>,
) {
    let (status, body) = post(
        &harness.state,
        "/api/v1/registration/validate",
        json!({ "field": field, "value": value }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["field"], field);
    assert_eq!(body["label"], label);
    assert_eq!(body["valid"], valid);
    assert_eq!(body.get("message").and_then(Value::as_str), message);
}

#[rstest]
#[actix_web::test]
async fn unknown_field_names_are_bad_requests(harness: Harness) {
    let (status, body) = post(
        &harness.state,
        "/api/v1/registration/validate",
        json!({ "field": "nickname", "value": "JD" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "nickname");
}

#[rstest]
#[actix_web::test]
async fn empty_submission_lists_every_required_field(harness: Harness) {
    let (status, body) = post(&harness.state, "/api/v1/registration", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = body["details"]["fields"]
        .as_object()
        .expect("field messages present");
    assert_eq!(fields.len(), 10);
    assert!(!fields.contains_key("address2"));
    assert_eq!(fields["phone"], "Phone number is required");
    assert!(harness.registrations.accepted().is_empty());
}

#[rstest]
#[actix_web::test]
async fn valid_submission_starts_verification(harness: Harness) {
    let (status, body) = post(
        &harness.state,
        "/api/v1/registration",
        json!({ "fields": valid_fields(), "courses": ["backend"] }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["step"], "verification");
    let verification_id = body["challenge"]["verificationId"]
        .as_str()
        .expect("challenge handle returned");

    let accepted = harness.registrations.accepted();
    assert_eq!(accepted.len(), 1);
    let courses: Vec<_> = accepted
        .first()
        .map(|payload| payload.courses().iter().map(|id| id.as_ref().to_owned()).collect())
        .unwrap_or_default();
    assert_eq!(courses, ["backend"]);

    let pending = harness.challenge_results.pending();
    assert_eq!(
        pending.first().map(ChallengeHandle::verification_id),
        Some(verification_id)
    );
}

#[rstest]
#[actix_web::test]
async fn identity_fills_names_and_email_unless_typed(harness: Harness) {
    let mut fields = valid_fields();
    if let Some(map) = fields.as_object_mut() {
        map.remove("lastName");
        map.remove("email");
    }

    let (status, _) = post(
        &harness.state,
        "/api/v1/registration",
        json!({
            "fields": fields,
            "identity": { "displayName": "Janet Smith", "email": "janet@example.com" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    let accepted = harness.registrations.accepted();
    let payload = accepted.first().expect("payload forwarded");
    assert_eq!(payload.value(FieldName::FirstName), "Jane");
    assert_eq!(payload.value(FieldName::LastName), "Smith");
    assert_eq!(payload.email(), "janet@example.com");
}

#[rstest]
#[actix_web::test]
async fn unknown_course_is_rejected_before_forwarding(harness: Harness) {
    let (status, body) = post(
        &harness.state,
        "/api/v1/registration",
        json!({ "fields": valid_fields(), "courses": ["astrology"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["courses"], json!(["astrology"]));
    assert!(harness.registrations.accepted().is_empty());
}

#[rstest]
#[actix_web::test]
async fn catalogue_outage_is_unavailable_not_a_bad_course() {
    let mut catalogue = MockCourseCatalogue::new();
    catalogue
        .expect_list_courses()
        .times(1)
        .returning(|| Err(CourseCatalogueError::connection("timed out")));
    let harness = harness_with(HttpStatePorts {
        catalogue: Arc::new(catalogue),
        ..HttpStatePorts::default()
    });

    let (status, body) = post(
        &harness.state,
        "/api/v1/registration",
        json!({ "fields": valid_fields(), "courses": ["backend"] }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "service_unavailable");
    assert_eq!(body["message"], "Course catalogue unavailable");
    assert!(harness.registrations.accepted().is_empty());
    assert!(harness.challenge_results.pending().is_empty());
}

#[rstest]
#[actix_web::test]
async fn submissions_without_courses_skip_the_catalogue() {
    let mut catalogue = MockCourseCatalogue::new();
    catalogue.expect_list_courses().never();
    let harness = harness_with(HttpStatePorts {
        catalogue: Arc::new(catalogue),
        ..HttpStatePorts::default()
    });

    let (status, _) = post(
        &harness.state,
        "/api/v1/registration",
        json!({ "fields": valid_fields() }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(harness.registrations.accepted().len(), 1);
}

#[rstest]
#[actix_web::test]
async fn challenge_failure_keeps_the_registration_step() {
    let mut challenges = MockPhoneChallenge::new();
    challenges
        .expect_request()
        .times(1)
        .returning(|_| Err(PhoneChallengeError::unavailable("quota exceeded")));
    let harness = harness_with(HttpStatePorts {
        challenges: Arc::new(challenges),
        ..HttpStatePorts::default()
    });

    let (status, body) = post(
        &harness.state,
        "/api/v1/registration",
        json!({ "fields": valid_fields() }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "step": "registration" }));
    assert_eq!(harness.registrations.accepted().len(), 1);
    assert!(harness.challenge_results.pending().is_empty());
}
