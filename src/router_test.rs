use super::*;
use crate::state::session::USER_ID_KEY;
use crate::state::storage::{KeyValueStore, MemoryStore};

// =============================================================
// Route table
// =============================================================

#[test]
fn public_routes_do_not_require_auth() {
    for path in ["/", "/login", "/register"] {
        assert!(!requires_auth(path), "{path} should be public");
    }
}

#[test]
fn protected_routes_require_auth() {
    for path in [
        "/dashboard",
        "/dashboard/",
        "/generate-plan",
        "/review/65d0b2b3d3b0b3d3b0b3d3b0",
    ] {
        assert!(requires_auth(path), "{path} should require auth");
    }
}

#[test]
fn unknown_routes_are_public() {
    // The router's fallback handles these; the guard stays out of the way.
    assert!(!requires_auth("/reviews"));
    assert!(!requires_auth("/review"));
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn protected_route_without_credential_redirects_to_login() {
    let store = MemoryStore::default();
    assert_eq!(
        decide("/dashboard", &store),
        NavigationDecision::RedirectToLogin
    );
    assert_eq!(
        decide("/review/p1", &store),
        NavigationDecision::RedirectToLogin
    );
}

#[test]
fn public_route_without_credential_proceeds() {
    let store = MemoryStore::default();
    assert_eq!(decide("/", &store), NavigationDecision::Allow);
    assert_eq!(decide("/login", &store), NavigationDecision::Allow);
}

#[test]
fn protected_route_with_credential_proceeds() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "t1");
    assert_eq!(decide("/dashboard", &store), NavigationDecision::Allow);
}

#[test]
fn stale_credential_still_proceeds() {
    // The guard never validates the credential; only presence counts.
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "long-expired-token");
    assert_eq!(decide("/generate-plan", &store), NavigationDecision::Allow);
}

#[test]
fn guard_checks_only_the_token_key() {
    // A lone userId (token removed out-of-band) does not open the gate.
    let store = MemoryStore::default();
    store.set(USER_ID_KEY, "u1");
    assert_eq!(
        decide("/dashboard", &store),
        NavigationDecision::RedirectToLogin
    );
}

#[test]
fn guard_sees_writes_from_the_session_store() {
    let store = MemoryStore::default();
    assert_eq!(
        decide("/dashboard", &store),
        NavigationDecision::RedirectToLogin
    );

    store.set(TOKEN_KEY, "t1");
    assert_eq!(decide("/dashboard", &store), NavigationDecision::Allow);

    store.remove(TOKEN_KEY);
    assert_eq!(
        decide("/dashboard", &store),
        NavigationDecision::RedirectToLogin
    );
}
