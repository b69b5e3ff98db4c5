use super::*;
use serde_json::json;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/auth/login"), format!("{}/auth/login", api_base()));
}

#[test]
fn login_endpoint_is_recognized() {
    assert!(is_login_endpoint("/auth/login"));
}

#[test]
fn other_auth_endpoints_are_not_login() {
    assert!(!is_login_endpoint("/auth/refresh-token"));
    assert!(!is_login_endpoint("/auth/me"));
    assert!(!is_login_endpoint("/employees"));
}

// =============================================================
// 401 retry directive
// =============================================================

#[test]
fn first_401_with_refresh_token_refreshes() {
    assert_eq!(retry_directive(401, "/employees", false, true), RetryDirective::RefreshAndRetry);
}

#[test]
fn login_401_never_refreshes() {
    assert_eq!(retry_directive(401, "/auth/login", false, true), RetryDirective::Fail);
}

#[test]
fn second_401_fails_instead_of_looping() {
    assert_eq!(retry_directive(401, "/employees", true, true), RetryDirective::Fail);
}

#[test]
fn missing_refresh_token_expires_without_network() {
    assert_eq!(retry_directive(401, "/employees", false, false), RetryDirective::SessionExpired);
}

#[test]
fn non_401_statuses_fail_directly() {
    assert_eq!(retry_directive(400, "/employees", false, true), RetryDirective::Fail);
    assert_eq!(retry_directive(403, "/employees", false, true), RetryDirective::Fail);
    assert_eq!(retry_directive(500, "/employees", false, true), RetryDirective::Fail);
}

// =============================================================
// Error normalization
// =============================================================

#[test]
fn server_message_wins_over_field_errors() {
    let payload = json!({
        "success": false,
        "message": "Leave overlaps an approved request",
        "errors": [{"field": "start_date", "message": "start_date is invalid"}],
    });
    let error = normalize_error(422, Some(payload));
    match error {
        ApiError::Validation { message, status, field_errors } => {
            assert_eq!(message, "Leave overlaps an approved request");
            assert_eq!(status, 422);
            assert_eq!(field_errors.len(), 1);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn field_messages_are_joined_without_server_message() {
    let payload = json!({
        "success": false,
        "errors": [
            {"field": "email", "message": "email is required"},
            {"field": "password", "message": "password is too short"},
        ],
    });
    let error = normalize_error(422, Some(payload));
    match error {
        ApiError::Validation { message, .. } => {
            assert_eq!(message, "email is required, password is too short");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn missing_payload_falls_back_to_generic_message() {
    let error = normalize_error(500, None);
    assert_eq!(error, ApiError::Api { message: GENERIC_ERROR_MESSAGE.to_owned(), status: 500 });
}

#[test]
fn non_envelope_payload_falls_back_to_generic_message() {
    let error = normalize_error(502, Some(json!("bad gateway")));
    assert_eq!(error, ApiError::Api { message: GENERIC_ERROR_MESSAGE.to_owned(), status: 502 });
}

#[test]
fn message_only_rejection_is_plain_api_error() {
    let payload = json!({"success": false, "message": "Forbidden"});
    let error = normalize_error(403, Some(payload));
    assert_eq!(error, ApiError::Api { message: "Forbidden".to_owned(), status: 403 });
}

#[test]
fn empty_server_message_is_ignored() {
    let payload = json!({"success": false, "message": ""});
    let error = normalize_error(500, Some(payload));
    assert_eq!(error, ApiError::Api { message: GENERIC_ERROR_MESSAGE.to_owned(), status: 500 });
}

#[test]
fn join_field_errors_is_none_for_empty_list() {
    assert_eq!(join_field_errors(&[]), None);
}

// =============================================================
// Success envelope parsing
// =============================================================

#[test]
fn empty_body_counts_as_bare_success() {
    let envelope = envelope_from_body("").expect("empty body should parse");
    assert!(envelope.success);
    assert!(envelope.data.is_none());
}

#[test]
fn junk_body_is_a_contract_violation() {
    assert!(matches!(envelope_from_body("<html>"), Err(ApiError::Contract(_))));
}

#[test]
fn envelope_body_parses() {
    let envelope = envelope_from_body(r#"{"success": true, "data": {"id": 1}}"#).expect("should parse");
    assert!(envelope.success);
    assert!(envelope.data.is_some());
}

// =============================================================
// data_from
// =============================================================

#[test]
fn data_from_deserializes_success_payload() {
    let envelope = Envelope {
        success: true,
        data: Some(json!([{"id": 7, "name": "handbook.pdf"}])),
        ..Envelope::default()
    };
    let documents: Vec<crate::net::types::DocumentRecord> =
        data_from(&envelope).expect("payload should deserialize");
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].name, "handbook.pdf");
}

#[test]
fn data_from_rejects_unsuccessful_envelope_with_its_message() {
    let envelope = Envelope {
        success: false,
        message: Some("Quota exceeded".to_owned()),
        ..Envelope::default()
    };
    let error = data_from::<serde_json::Value>(&envelope).expect_err("should reject");
    assert_eq!(error, ApiError::Api { message: "Quota exceeded".to_owned(), status: 200 });
}

#[test]
fn data_from_requires_data() {
    let envelope = Envelope { success: true, ..Envelope::default() };
    assert!(matches!(data_from::<serde_json::Value>(&envelope), Err(ApiError::Contract(_))));
}
