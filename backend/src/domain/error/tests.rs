//! Error payload construction and serialisation.

use super::*;
use crate::domain::FieldName;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn helpers_set_the_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn blank_messages_fall_back_to_defaults() {
    assert_eq!(Error::invalid_request("   ").message(), "Invalid request");
    assert_eq!(Error::service_unavailable("").message(), "Service unavailable");
}

#[rstest]
fn no_trace_id_outside_a_request() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("fixture is a valid UUID");
    let error = TraceId::scope(trace_id, async { Error::invalid_request("bad") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn invalid_fields_keys_messages_by_wire_name() {
    let error = Error::invalid_fields(&[
        FieldError::new(FieldName::FirstName, "First name is required"),
        FieldError::new(FieldName::NationalId, "Must be exactly 14 digits"),
    ]);

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details(),
        Some(&json!({
            "fields": {
                "firstName": "First name is required",
                "nationalId": "Must be exactly 14 digits"
            }
        }))
    );
}

#[rstest]
fn serialises_camel_case_and_skips_absent_parts() {
    let value = serde_json::to_value(Error::invalid_request("bad").with_trace_id(TRACE_ID))
        .expect("error serialises");
    assert_eq!(
        value,
        json!({ "code": "invalid_request", "message": "bad", "traceId": TRACE_ID })
    );
}
