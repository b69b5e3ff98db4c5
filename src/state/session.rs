//! Durable session persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client reads tokens here on every request and writes the access
//! token back on refresh; the auth context owns the rest of the lifecycle.
//! No other module touches these keys.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{TokenPair, User};

/// `localStorage` key holding the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// `localStorage` key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// `localStorage` key holding the JSON-serialized user snapshot.
pub const USER_KEY: &str = "user";

/// Everything the client persists about the signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Cached user snapshot, always present in a loadable session.
    pub user: User,
    /// Bearer token, absent for cookie-backed tenants.
    pub access_token: Option<String>,
    /// Refresh token, absent until registration or a token-issuing login.
    pub refresh_token: Option<String>,
}

/// Outcome of decoding the stored `user` entry.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum StoredUser {
    /// No `user` entry exists.
    Missing,
    /// The entry exists but is not a parseable user snapshot.
    Corrupt,
    /// A readable snapshot.
    Valid(User),
}

/// Decode a raw `user` entry. Corruption is reported, never propagated as
/// a panic or error.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_user(raw: Option<String>) -> StoredUser {
    match raw {
        None => StoredUser::Missing,
        Some(raw) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => StoredUser::Valid(user),
            Err(_) => StoredUser::Corrupt,
        },
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the persisted session, keyed on a readable user snapshot.
///
/// A corrupt `user` entry is removed and treated as absent; the token
/// entries are left untouched either way.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let raw_user = storage.get_item(USER_KEY).ok().flatten();
        match decode_user(raw_user) {
            StoredUser::Valid(user) => Some(Session {
                user,
                access_token: storage.get_item(ACCESS_TOKEN_KEY).ok().flatten(),
                refresh_token: storage.get_item(REFRESH_TOKEN_KEY).ok().flatten(),
            }),
            StoredUser::Corrupt => {
                let _ = storage.remove_item(USER_KEY);
                None
            }
            StoredUser::Missing => None,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the bearer access token.
pub fn load_access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the refresh token.
pub fn load_refresh_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(REFRESH_TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the user snapshot.
pub fn save_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(USER_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Persist both tokens of a freshly issued pair.
pub fn save_tokens(tokens: &TokenPair) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.set_item(ACCESS_TOKEN_KEY, &tokens.access_token);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, &tokens.refresh_token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tokens;
    }
}

/// Replace the access token in place after a refresh.
pub fn save_access_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove every persisted session entry.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
