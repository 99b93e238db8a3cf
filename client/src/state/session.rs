//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<Session>`. Loaded from storage after
//! hydration, established by the login page, and torn down by logout. Route
//! guards and the nav bar read it instead of touching storage themselves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::SessionStore;

/// Storage key holding the opaque access token.
pub const TOKEN_KEY: &str = "accessToken";
/// Storage key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Persisted credentials plus a flag telling whether storage has been read yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    /// False until `load`/`establish`/`clear` ran; SSR always renders unloaded.
    pub loaded: bool,
}

impl Session {
    /// Read the persisted session. A malformed user record is treated as absent.
    pub fn load(store: &impl SessionStore) -> Self {
        let token = store.read(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = store
            .read(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
        Self { token, user, loaded: true }
    }

    /// Persist a freshly issued token and user, returning the new session.
    pub fn establish(store: &impl SessionStore, token: String, user: User) -> Self {
        store.write(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(raw) => store.write(USER_KEY, &raw),
            Err(e) => leptos::logging::warn!("failed to encode user record: {e}"),
        }
        Self { token: Some(token), user: Some(user), loaded: true }
    }

    /// Remove all persisted session keys, returning an empty loaded session.
    pub fn clear(store: &impl SessionStore) -> Self {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        Self { token: None, user: None, loaded: true }
    }

    /// Presence check only; the token is never validated.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Name shown in navigation chrome.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}
