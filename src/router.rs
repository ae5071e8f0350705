//! Route table and navigation guard.
//!
//! The guard is a single binary gate evaluated against the current path on
//! every navigation: a route that requires authentication with no persisted
//! credential redirects to `/login`, everything else proceeds. The check is
//! purely "is the `token` key present", with no expiry check and no server
//! round trip, so a stale credential still passes (the backend rejects it
//! later).

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::state::session::TOKEN_KEY;
use crate::state::storage::KeyValueStore;

/// Login route, the redirect target for denied navigation.
pub const LOGIN_PATH: &str = "/login";
/// Dashboard route, where a fresh session lands.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Plan-generation route.
pub const GENERATE_PLAN_PATH: &str = "/generate-plan";
/// Review route prefix; the full route is `/review/:plan_id`.
pub const REVIEW_PREFIX: &str = "/review/";

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed to the requested route.
    Allow,
    /// Send the visitor to the login route instead.
    RedirectToLogin,
}

/// Whether a path belongs to the authenticated area of the app.
pub fn requires_auth(path: &str) -> bool {
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    path == DASHBOARD_PATH || path == GENERATE_PLAN_PATH || path.starts_with(REVIEW_PREFIX)
}

/// Decide a navigation attempt against the persisted credential.
///
/// Reads through the same storage port the session store writes, so the
/// guard always sees the latest committed session, including one persisted
/// by a previous page load.
pub fn decide(path: &str, store: &dyn KeyValueStore) -> NavigationDecision {
    if requires_auth(path) && store.get(TOKEN_KEY).is_none() {
        NavigationDecision::RedirectToLogin
    } else {
        NavigationDecision::Allow
    }
}
