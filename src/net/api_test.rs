use std::sync::Arc;

use super::*;
use crate::state::session::TOKEN_KEY;
use crate::state::storage::MemoryStore;

fn client(store: &Arc<MemoryStore>) -> ApiClient {
    ApiClient::new(Arc::clone(store) as Arc<dyn KeyValueStore>)
}

#[test]
fn api_client_is_context_friendly() {
    // Provided via context and cloned by pages; the clone shares the store.
    let store = Arc::new(MemoryStore::default());
    let api = client(&store);
    let cloned = api.clone();
    store.set(TOKEN_KEY, "t1");
    assert_eq!(cloned.authorization(), Some("Bearer t1".to_owned()));
}

// =============================================================
// URL building
// =============================================================

#[test]
fn urls_are_rooted_at_the_api_base() {
    let store = Arc::new(MemoryStore::default());
    let api = client(&store);
    assert_eq!(api.url("/auth/login"), "/api/auth/login");
    assert_eq!(
        api.url("/medication/reviews?user_id=u1"),
        "/api/medication/reviews?user_id=u1"
    );
}

#[test]
fn custom_base_drops_trailing_slash() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
    let api = ApiClient::with_base("http://localhost:3000/api/", store);
    assert_eq!(api.url("/health"), "http://localhost:3000/api/health");
}

// =============================================================
// Bearer decoration
// =============================================================

#[test]
fn authorization_absent_without_persisted_credential() {
    let store = Arc::new(MemoryStore::default());
    let api = client(&store);
    assert_eq!(api.authorization(), None);
}

#[test]
fn authorization_carries_persisted_credential() {
    let store = Arc::new(MemoryStore::default());
    store.set(TOKEN_KEY, "t1");
    let api = client(&store);
    assert_eq!(api.authorization(), Some("Bearer t1".to_owned()));
}

#[test]
fn authorization_reads_store_at_request_time() {
    let store = Arc::new(MemoryStore::default());
    let api = client(&store);
    assert_eq!(api.authorization(), None);

    // A credential persisted after client construction is picked up.
    store.set(TOKEN_KEY, "t2");
    assert_eq!(api.authorization(), Some("Bearer t2".to_owned()));

    store.remove(TOKEN_KEY);
    assert_eq!(api.authorization(), None);
}

#[test]
fn authorization_treats_empty_credential_as_absent() {
    let store = Arc::new(MemoryStore::default());
    store.set(TOKEN_KEY, "");
    let api = client(&store);
    assert_eq!(api.authorization(), None);
}

// =============================================================
// Error normalization
// =============================================================

#[test]
fn server_error_body_is_surfaced_verbatim() {
    let err = normalize_error(400, r#"{"error":"invalid"}"#);
    assert_eq!(err, ApiError::Server(serde_json::json!({"error":"invalid"})));
}

#[test]
fn non_json_error_body_is_surfaced_as_string() {
    let err = normalize_error(502, "Bad Gateway");
    assert_eq!(
        err,
        ApiError::Server(serde_json::Value::String("Bad Gateway".to_owned()))
    );
}

#[test]
fn empty_error_body_falls_back_to_status_message() {
    let err = normalize_error(500, "");
    assert_eq!(
        err,
        ApiError::Transport("request failed with status 500".to_owned())
    );
}

#[test]
fn null_error_body_falls_back_to_status_message() {
    let err = normalize_error(500, "null");
    assert_eq!(
        err,
        ApiError::Transport("request failed with status 500".to_owned())
    );
}

// =============================================================
// Display messages
// =============================================================

#[test]
fn message_prefers_message_then_error_field() {
    let err = ApiError::Server(serde_json::json!({"message":"m1","error":"m2"}));
    assert_eq!(err.message(), "m1");

    let err = ApiError::Server(serde_json::json!({"error":"Validation error: bad date"}));
    assert_eq!(err.message(), "Validation error: bad date");
}

#[test]
fn message_falls_back_to_whole_payload() {
    let err = ApiError::Server(serde_json::json!({"code": 17}));
    assert_eq!(err.message(), r#"{"code":17}"#);
}

#[test]
fn message_unwraps_string_payload_and_transport() {
    let err = ApiError::Server(serde_json::Value::String("Bad Gateway".to_owned()));
    assert_eq!(err.message(), "Bad Gateway");

    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.message(), "connection refused");
}
