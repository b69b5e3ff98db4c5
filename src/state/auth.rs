//! Process-wide authentication state and session lifecycle operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided at the app root and consumed by
//! route guards, the shell, and the auth pages. The signal is created at
//! application start and can be rebuilt from scratch in tests; nothing in
//! this module holds ambient global state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Envelope, Organization, TokenPair, User};
use crate::state::session;

/// Authentication state tracking the current user and bootstrap status.
///
/// `loading` stays `true` from first render until the persisted session
/// has been re-validated (or found absent), so consumers never observe a
/// false "unauthenticated" flash.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Create and provide the auth context signal. Call once at the app root.
pub fn provide_auth() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    auth
}

/// Fetch the auth context provided by the app root.
pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// Outcome of a login or registration attempt whose HTTP call succeeded.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
    /// Credentials accepted; the user is signed in.
    Authenticated {
        user: User,
        /// Token pair when the payload carried one. Login payloads may
        /// omit it; registration payloads never do.
        tokens: Option<TokenPair>,
    },
    /// The backend rejected the attempt; envelope returned for display.
    Rejected(Envelope),
}

/// Payload for the organization + admin signup form.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Registration {
    pub organization_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Seed in-memory state synchronously from the persisted session.
pub fn hydrate_from_storage(auth: RwSignal<AuthState>) {
    if let Some(stored) = session::load() {
        auth.update(|state| state.user = Some(stored.user));
    }
}

/// Re-validate the persisted session against the backend.
///
/// A failed check keeps the hydrated user: transient outages must not
/// sign the user out. Only the refresh path expires a session. `loading`
/// drops to `false` strictly after this settles.
pub async fn bootstrap(auth: RwSignal<AuthState>) {
    if session::load_access_token().is_some() {
        match api::get("/auth/me").await {
            Ok(envelope) => {
                if let Some(user) = envelope.data.as_ref().and_then(user_from_data) {
                    session::save_user(&user);
                    auth.update(|state| state.user = Some(user));
                }
            }
            Err(error) => {
                leptos::logging::warn!("session verification failed: {error}");
            }
        }
    }
    auth.update(|state| state.loading = false);
}

/// Sign in with email/password credentials.
///
/// # Errors
///
/// Propagates [`ApiError`] from the HTTP client, or `Contract` when a
/// success payload lacks the user record.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<AuthOutcome, ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    let envelope = api::post("/auth/login", &body).await?;
    let outcome = interpret_login(envelope)?;
    apply_authenticated(auth, &outcome);
    Ok(outcome)
}

/// Register a new organization and its first account.
///
/// # Errors
///
/// Propagates [`ApiError`] from the HTTP client, or `Contract` when a
/// success payload lacks the user record or either token.
pub async fn register(auth: RwSignal<AuthState>, registration: &Registration) -> Result<AuthOutcome, ApiError> {
    let body = serde_json::to_value(registration)
        .map_err(|_| ApiError::Contract("unserializable registration payload".to_owned()))?;
    let envelope = api::post("/auth/register", &body).await?;
    let outcome = interpret_register(envelope)?;
    apply_authenticated(auth, &outcome);
    Ok(outcome)
}

/// Clear the persisted session and the in-memory user. Navigation is the
/// caller's responsibility.
pub fn logout(auth: RwSignal<AuthState>) {
    session::clear();
    auth.update(|state| state.user = None);
}

fn apply_authenticated(auth: RwSignal<AuthState>, outcome: &AuthOutcome) {
    if let AuthOutcome::Authenticated { user, tokens } = outcome {
        if let Some(tokens) = tokens {
            session::save_tokens(tokens);
        }
        session::save_user(user);
        auth.update(|state| state.user = Some(user.clone()));
    }
}

/// Interpret a login envelope.
///
/// Exactly two payload shapes are valid: a success envelope carrying
/// `data.user`, or an explicit rejection. Anything else is a broken
/// contract and fails loudly rather than being absorbed.
pub(crate) fn interpret_login(envelope: Envelope) -> Result<AuthOutcome, ApiError> {
    if !envelope.success {
        return Ok(AuthOutcome::Rejected(envelope));
    }
    let Some(data) = envelope.data.as_ref() else {
        return Err(ApiError::Contract("authentication response missing data".to_owned()));
    };
    let Some(user) = user_from_data(data) else {
        return Err(ApiError::Contract("authentication response missing user".to_owned()));
    };
    let tokens = tokens_from_data(data);
    Ok(AuthOutcome::Authenticated { user, tokens })
}

/// Interpret a registration envelope; unlike login, both tokens must be
/// present in a successful payload.
pub(crate) fn interpret_register(envelope: Envelope) -> Result<AuthOutcome, ApiError> {
    match interpret_login(envelope)? {
        AuthOutcome::Authenticated { tokens: None, .. } => {
            Err(ApiError::Contract("registration response missing tokens".to_owned()))
        }
        outcome => Ok(outcome),
    }
}

/// Parse `data.user`, attaching the sibling `data.organization` snapshot
/// when the user record does not already carry one.
pub(crate) fn user_from_data(data: &serde_json::Value) -> Option<User> {
    let mut user: User = serde_json::from_value(data.get("user")?.clone()).ok()?;
    if user.organization.is_none() {
        if let Some(organization) = data.get("organization") {
            user.organization = serde_json::from_value::<Organization>(organization.clone()).ok();
        }
    }
    Some(user)
}

pub(crate) fn tokens_from_data(data: &serde_json::Value) -> Option<TokenPair> {
    serde_json::from_value(data.get("tokens")?.clone()).ok()
}
