use std::sync::Arc;

use super::*;
use crate::net::api::ApiClient;
use crate::state::storage::MemoryStore;

fn auth(token: &str, user_id: &str) -> AuthResponse {
    AuthResponse {
        token: token.to_owned(),
        user_id: user_id.to_owned(),
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn empty_credential_is_not_authenticated() {
    let state = SessionState {
        token: Some(String::new()),
        user_id: Some("u1".to_owned()),
        user: None,
    };
    assert!(!state.is_authenticated());
}

#[test]
fn apply_credentials_mirrors_memory_and_store() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();

    state.apply_credentials(&store, "alice", &auth("t1", "u1"));

    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user_id.as_deref(), Some("u1"));
    assert_eq!(
        state.user,
        Some(CurrentUser {
            id: "u1".to_owned(),
            username: "alice".to_owned(),
        })
    );
    assert!(state.is_authenticated());

    assert_eq!(store.get(TOKEN_KEY), Some("t1".to_owned()));
    assert_eq!(store.get(USER_ID_KEY), Some("u1".to_owned()));
}

#[test]
fn clear_removes_memory_and_persisted_keys() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.apply_credentials(&store, "alice", &auth("t1", "u1"));

    state.clear(&store);

    assert_eq!(state, SessionState::default());
    assert!(!state.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_ID_KEY), None);
}

#[test]
fn restore_recovers_credential_but_not_user() {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.apply_credentials(&store, "alice", &auth("t1", "u1"));

    // Simulates a page reload: a fresh state rebuilt from the store.
    let restored = SessionState::restore(&store);

    assert_eq!(restored.token.as_deref(), Some("t1"));
    assert_eq!(restored.user_id.as_deref(), Some("u1"));
    assert!(restored.is_authenticated());
    // The display name is gone; it was never persisted.
    assert!(restored.user.is_none());
}

#[test]
fn restore_from_empty_store_is_unauthenticated() {
    let store = MemoryStore::default();
    let restored = SessionState::restore(&store);
    assert_eq!(restored, SessionState::default());
}

// =============================================================
// Persisted-session check
// =============================================================

#[test]
fn has_persisted_session_requires_both_keys() {
    let store = MemoryStore::default();
    assert!(!has_persisted_session(&store));

    store.set(TOKEN_KEY, "t1");
    assert!(!has_persisted_session(&store));

    store.set(USER_ID_KEY, "u1");
    assert!(has_persisted_session(&store));

    store.remove(TOKEN_KEY);
    assert!(!has_persisted_session(&store));
}

#[test]
fn has_persisted_session_ignores_credential_validity() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "long-expired-token");
    store.set(USER_ID_KEY, "u1");
    assert!(has_persisted_session(&store));
}

// =============================================================
// SessionStore handle
// =============================================================

fn session_store(store: &Arc<MemoryStore>) -> SessionStore {
    let kv: Arc<dyn KeyValueStore> = store.clone();
    SessionStore::new(Arc::clone(&kv), ApiClient::new(kv))
}

#[test]
fn new_store_rehydrates_persisted_session() {
    let store = Arc::new(MemoryStore::default());
    store.set(TOKEN_KEY, "t1");
    store.set(USER_ID_KEY, "u1");

    let session = session_store(&store);

    assert!(session.initialize());
    assert!(session.is_authenticated());
    assert!(session.state().get_untracked().user.is_none());
}

#[test]
fn logout_always_succeeds_and_clears_everything() {
    let store = Arc::new(MemoryStore::default());
    let session = session_store(&store);

    // Logging out of a session that was never opened is fine.
    session.logout();

    store.set(TOKEN_KEY, "t1");
    store.set(USER_ID_KEY, "u1");
    session.logout();

    assert!(!session.is_authenticated());
    assert!(!session.initialize());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_ID_KEY), None);
}

#[test]
fn initialize_reads_the_store_at_call_time() {
    let store = Arc::new(MemoryStore::default());
    let session = session_store(&store);
    assert!(!session.initialize());

    // Keys appearing after construction are still observed.
    store.set(TOKEN_KEY, "t1");
    store.set(USER_ID_KEY, "u1");
    assert!(session.initialize());
}
