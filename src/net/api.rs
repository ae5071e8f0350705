//! REST API client for the MedPlan backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Two kinds only. A response with a non-2xx status surfaces the server's
//! body verbatim ([`ApiError::Server`]); anything that never produced a
//! usable response surfaces the transport error's message
//! ([`ApiError::Transport`]). There is no retry and no timeout policy;
//! every call is a single best-effort round trip.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use crate::net::types::{
    AuthRequest, AuthResponse, CreateReviewRequest, GeneratePlanRequest, MedicationPlan,
    MedicationReview,
};
use crate::state::session::TOKEN_KEY;
use crate::state::storage::KeyValueStore;

/// Base path of the backend API, same origin as the app.
pub const API_BASE: &str = "/api";

/// Error returned by every API operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status; the payload is the
    /// response body exactly as sent.
    #[error("{0}")]
    Server(serde_json::Value),
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    #[cfg(not(feature = "hydrate"))]
    fn unavailable() -> Self {
        Self::Transport("not available on server".to_owned())
    }

    /// Human-readable message for display.
    ///
    /// Server payloads prefer a `message` field, then `error` (the shape the
    /// backend actually sends), then fall back to the whole payload.
    pub fn message(&self) -> String {
        match self {
            Self::Transport(msg) => msg.clone(),
            Self::Server(payload) => {
                if let Some(text) = payload.as_str() {
                    return text.to_owned();
                }
                payload
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .or_else(|| payload.get("error").and_then(serde_json::Value::as_str))
                    .map_or_else(|| payload.to_string(), ToOwned::to_owned)
            }
        }
    }
}

/// Map a non-2xx response body to an [`ApiError`].
///
/// The body is surfaced verbatim when there is one: JSON bodies as parsed
/// values, anything else as a raw string. An empty (or JSON `null`) body
/// collapses to a status message, since there is no payload to hand back.
pub fn normalize_error(status: u16, body: &str) -> ApiError {
    if body.is_empty() {
        return ApiError::Transport(format!("request failed with status {status}"));
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) => {
            ApiError::Transport(format!("request failed with status {status}"))
        }
        Ok(payload) => ApiError::Server(payload),
        Err(_) => ApiError::Server(serde_json::Value::String(body.to_owned())),
    }
}

/// Typed client over the backend HTTP surface.
///
/// Reads the persisted credential through the injected [`KeyValueStore`] at
/// request time, so it always reflects the session store's latest write.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    store: Arc<dyn KeyValueStore>,
}

impl ApiClient {
    /// Create a client against [`API_BASE`].
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_base(API_BASE, store)
    }

    /// Create a client against a custom base path.
    pub fn with_base(base: impl Into<String>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_owned(),
            store,
        }
    }

    /// Absolute path of an endpoint under the client's base.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// `Bearer` header value for the persisted credential, if any.
    ///
    /// An absent or empty `token` key means the request goes out
    /// unauthenticated and the server decides whether to reject it.
    pub fn authorization(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .map(|token| format!("Bearer {token}"))
    }

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Propagates the server's error payload, or the transport error's
    /// message if no response came back.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let request = AuthRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/auth/register", &request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::unavailable())
        }
    }

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Propagates the server's error payload, or the transport error's
    /// message if no response came back.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = AuthRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/auth/login", &request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::unavailable())
        }
    }

    /// `POST /medication/plans`
    ///
    /// # Errors
    ///
    /// Propagates the server's error payload, or the transport error's
    /// message if no response came back.
    pub async fn generate_plan(
        &self,
        user_id: &str,
        medication_name: &str,
        focus_areas: &[String],
    ) -> Result<MedicationPlan, ApiError> {
        let request = GeneratePlanRequest {
            user_id: user_id.to_owned(),
            medication_name: medication_name.to_owned(),
            focus_areas: focus_areas.to_vec(),
        };
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/medication/plans", &request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::unavailable())
        }
    }

    /// `GET /medication/reviews?user_id=`
    ///
    /// # Errors
    ///
    /// Propagates the server's error payload, or the transport error's
    /// message if no response came back.
    pub async fn fetch_reviews(&self, user_id: &str) -> Result<Vec<MedicationReview>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&format!("/medication/reviews?user_id={user_id}"))
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(ApiError::unavailable())
        }
    }

    /// `POST /medication/reviews`
    ///
    /// The payload passes through untouched; its meaning belongs to the
    /// backend.
    ///
    /// # Errors
    ///
    /// Propagates the server's error payload, or the transport error's
    /// message if no response came back.
    pub async fn create_review(
        &self,
        review: &CreateReviewRequest,
    ) -> Result<MedicationReview, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/medication/reviews", review).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = review;
            Err(ApiError::unavailable())
        }
    }

    /// `GET /health`
    ///
    /// # Errors
    ///
    /// Propagates the server's error payload, or the transport error's
    /// message if no response came back.
    pub async fn health_check(&self) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/health").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let mut request = gloo_net::http::Request::post(&self.url(path))
            .header("Content-Type", "application/json");
        if let Some(auth) = self.authorization() {
            request = request.header("Authorization", &auth);
        }
        let response = request
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    #[cfg(feature = "hydrate")]
    async fn get_json<T>(&self, path_and_query: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = gloo_net::http::Request::get(&self.url(path_and_query))
            .header("Content-Type", "application/json");
        if let Some(auth) = self.authorization() {
            request = request.header("Authorization", &auth);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    #[cfg(feature = "hydrate")]
    async fn decode<T>(response: gloo_net::http::Response) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        if response.ok() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(normalize_error(status, &body))
        }
    }
}
