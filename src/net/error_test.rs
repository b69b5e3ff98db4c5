use super::*;

// =============================================================
// Status accessor
// =============================================================

#[test]
fn http_variants_carry_their_status() {
    let api = ApiError::Api { message: "x".to_owned(), status: 500 };
    assert_eq!(api.status(), Some(500));

    let validation =
        ApiError::Validation { message: "x".to_owned(), status: 422, field_errors: Vec::new() };
    assert_eq!(validation.status(), Some(422));
}

#[test]
fn transport_variants_have_no_status() {
    assert_eq!(ApiError::Network { message: "x".to_owned() }.status(), None);
    assert_eq!(ApiError::SessionExpired.status(), None);
    assert_eq!(ApiError::Contract("x".to_owned()).status(), None);
}

// =============================================================
// Display
// =============================================================

#[test]
fn display_uses_the_normalized_message() {
    let error = ApiError::Api { message: "Quota exceeded".to_owned(), status: 402 };
    assert_eq!(error.to_string(), "Quota exceeded");
}

#[test]
fn session_expired_message_is_user_facing() {
    assert!(ApiError::SessionExpired.to_string().contains("expired"));
}

#[test]
fn contract_violation_displays_its_detail() {
    let error = ApiError::Contract("authentication response missing user".to_owned());
    assert_eq!(error.to_string(), "authentication response missing user");
}
