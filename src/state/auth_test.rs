use super::*;
use serde_json::json;

fn envelope_of(value: serde_json::Value) -> Envelope {
    serde_json::from_value(value).expect("test envelope should parse")
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_starts_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn authentication_predicate_follows_user_presence() {
    let mut state = AuthState::default();
    assert!(!state.is_authenticated());
    state.user = Some(User::default());
    assert!(state.is_authenticated());
}

// =============================================================
// interpret_login
// =============================================================

#[test]
fn login_success_with_user_and_organization_authenticates() {
    let envelope = envelope_of(json!({
        "success": true,
        "data": {
            "user": {"id": 1, "first_name": "Dana", "email": "dana@example.com", "role": "admin"},
            "organization": {"id": 7, "name": "Acme"},
        },
    }));
    match interpret_login(envelope).expect("valid login payload") {
        AuthOutcome::Authenticated { user, tokens } => {
            assert_eq!(user.id, 1);
            assert_eq!(user.organization.as_ref().map(|org| org.name.as_str()), Some("Acme"));
            assert!(tokens.is_none());
        }
        AuthOutcome::Rejected(_) => panic!("expected authentication"),
    }
}

#[test]
fn login_rejection_is_returned_unmodified() {
    let envelope = envelope_of(json!({"success": false, "message": "Invalid credentials"}));
    match interpret_login(envelope).expect("rejection is not an error") {
        AuthOutcome::Rejected(envelope) => {
            assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
        }
        AuthOutcome::Authenticated { .. } => panic!("expected rejection"),
    }
}

#[test]
fn login_success_without_user_is_a_contract_violation() {
    let envelope = envelope_of(json!({"success": true, "data": {"organization": {"id": 7}}}));
    assert!(matches!(interpret_login(envelope), Err(ApiError::Contract(_))));
}

#[test]
fn login_success_without_data_is_a_contract_violation() {
    let envelope = envelope_of(json!({"success": true}));
    assert!(matches!(interpret_login(envelope), Err(ApiError::Contract(_))));
}

#[test]
fn login_captures_tokens_when_present() {
    let envelope = envelope_of(json!({
        "success": true,
        "data": {
            "user": {"id": 1},
            "tokens": {"accessToken": "a", "refreshToken": "b"},
        },
    }));
    match interpret_login(envelope).expect("valid login payload") {
        AuthOutcome::Authenticated { tokens, .. } => {
            let tokens = tokens.expect("tokens should be captured");
            assert_eq!(tokens.access_token, "a");
            assert_eq!(tokens.refresh_token, "b");
        }
        AuthOutcome::Rejected(_) => panic!("expected authentication"),
    }
}

// =============================================================
// interpret_register
// =============================================================

#[test]
fn register_requires_both_tokens() {
    let envelope = envelope_of(json!({
        "success": true,
        "data": {"user": {"id": 1}, "organization": {"id": 7, "name": "Acme"}},
    }));
    assert!(matches!(interpret_register(envelope), Err(ApiError::Contract(_))));
}

#[test]
fn register_with_tokens_authenticates() {
    let envelope = envelope_of(json!({
        "success": true,
        "data": {
            "user": {"id": 1, "role_type": "admin"},
            "organization": {"id": 7, "name": "Acme"},
            "tokens": {"accessToken": "a", "refreshToken": "b"},
        },
    }));
    match interpret_register(envelope).expect("valid registration payload") {
        AuthOutcome::Authenticated { user, tokens } => {
            assert_eq!(user.organization.as_ref().map(|org| org.id), Some(7));
            assert!(tokens.is_some());
        }
        AuthOutcome::Rejected(_) => panic!("expected authentication"),
    }
}

#[test]
fn register_rejection_passes_through() {
    let envelope = envelope_of(json!({"success": false, "message": "Email already in use"}));
    assert!(matches!(interpret_register(envelope), Ok(AuthOutcome::Rejected(_))));
}

// =============================================================
// Payload helpers
// =============================================================

#[test]
fn user_from_data_merges_sibling_organization() {
    let data = json!({
        "user": {"id": 1},
        "organization": {"id": 9, "name": "Globex"},
    });
    let user = user_from_data(&data).expect("user should parse");
    assert_eq!(user.organization.as_ref().map(|org| org.name.as_str()), Some("Globex"));
}

#[test]
fn user_from_data_keeps_embedded_organization() {
    let data = json!({
        "user": {"id": 1, "organization": {"id": 3, "name": "Initech"}},
        "organization": {"id": 9, "name": "Globex"},
    });
    let user = user_from_data(&data).expect("user should parse");
    assert_eq!(user.organization.as_ref().map(|org| org.id), Some(3));
}

#[test]
fn user_from_data_is_none_without_user_key() {
    assert!(user_from_data(&json!({"organization": {"id": 9}})).is_none());
}

#[test]
fn tokens_from_data_requires_both_fields() {
    assert!(tokens_from_data(&json!({"tokens": {"accessToken": "a"}})).is_none());
    assert!(tokens_from_data(&json!({})).is_none());
}
