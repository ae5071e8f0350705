//! Session store: the client's belief about who is logged in.
//!
//! The in-memory [`SessionState`] mirrors two keys (`token`, `userId`) into
//! the persisted store; the two are set and cleared together. The `user`
//! record (display name) lives in memory only and is rebuilt on
//! login/register, so after a reload the session is still authenticated but
//! the display name is gone. That asymmetry is inherited product behavior,
//! kept as-is.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::{GetUntracked, RwSignal, Set};

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::AuthResponse;
use crate::state::storage::KeyValueStore;

/// Persisted key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Persisted key holding the user identifier.
pub const USER_ID_KEY: &str = "userId";

/// The signed-in user as known to the client. Not persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

/// In-memory session data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub user: Option<CurrentUser>,
}

impl SessionState {
    /// Rehydrate from the persisted store. Only `token` and `userId` come
    /// back; `user` starts empty.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        Self {
            token: store.get(TOKEN_KEY),
            user_id: store.get(USER_ID_KEY),
            user: None,
        }
    }

    /// Authenticated means exactly "the credential is non-empty". Nothing
    /// here validates the credential against the server.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// Record a successful login/register: set credential, user id, and the
    /// in-memory user, and mirror the two persisted keys.
    pub fn apply_credentials(
        &mut self,
        store: &dyn KeyValueStore,
        username: &str,
        auth: &AuthResponse,
    ) {
        self.token = Some(auth.token.clone());
        self.user_id = Some(auth.user_id.clone());
        self.user = Some(CurrentUser {
            id: auth.user_id.clone(),
            username: username.to_owned(),
        });

        store.set(TOKEN_KEY, &auth.token);
        store.set(USER_ID_KEY, &auth.user_id);
    }

    /// Clear the session: in-memory fields and both persisted keys.
    pub fn clear(&mut self, store: &dyn KeyValueStore) {
        self.token = None;
        self.user_id = None;
        self.user = None;

        store.remove(TOKEN_KEY);
        store.remove(USER_ID_KEY);
    }
}

/// True iff both persisted session keys are present at call time. Staleness
/// is possible and accepted; no server round trip happens here.
pub fn has_persisted_session(store: &dyn KeyValueStore) -> bool {
    store.get(TOKEN_KEY).is_some() && store.get(USER_ID_KEY).is_some()
}

/// Handle owning the session: the storage port, the API client, and the
/// reactive state. Cloned freely and provided via context; there is exactly
/// one logical session per handle, and this handle is the only writer of the
/// persisted session keys.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    api: ApiClient,
    state: RwSignal<SessionState>,
}

impl SessionStore {
    /// Build the store, rehydrating any previously persisted session.
    pub fn new(store: Arc<dyn KeyValueStore>, api: ApiClient) -> Self {
        let state = RwSignal::new(SessionState::restore(store.as_ref()));
        Self { store, api, state }
    }

    /// Reactive session state, for views.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Create an account and open a session. The raw response is returned.
    ///
    /// # Errors
    ///
    /// The API client's error, unchanged; no session state is touched.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let auth = self.api.register(username, password).await?;
        self.record(username, &auth);
        Ok(auth)
    }

    /// Open a session for an existing account. The raw response is returned.
    ///
    /// # Errors
    ///
    /// The API client's error, unchanged; no session state is touched.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let auth = self.api.login(username, password).await?;
        self.record(username, &auth);
        Ok(auth)
    }

    /// End the session. No network call; always succeeds.
    pub fn logout(&self) {
        let mut state = self.state.get_untracked();
        state.clear(self.store.as_ref());
        self.state.set(state);
    }

    /// Whether a previously persisted session exists (both keys present).
    /// The credential is not validated server-side.
    pub fn initialize(&self) -> bool {
        has_persisted_session(self.store.as_ref())
    }

    /// Whether the in-memory credential is non-empty.
    pub fn is_authenticated(&self) -> bool {
        self.state.get_untracked().is_authenticated()
    }

    fn record(&self, username: &str, auth: &AuthResponse) {
        let mut state = self.state.get_untracked();
        state.apply_credentials(self.store.as_ref(), username, auth);
        self.state.set(state);
    }
}
