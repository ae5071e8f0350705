//! Wire types for the MedPlan backend API.
//!
//! Field names follow the backend contract exactly (snake_case JSON). The
//! backend stores documents in MongoDB and serializes BSON ObjectIds and
//! timestamps straight through, so identifier and date fields arrive as
//! opaque JSON values (`{"$oid": "..."}`, `{"$date": ...}`); this layer
//! never interprets them beyond extracting a route-usable id string.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials payload for both `/auth/register` and `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Success response of `/auth/register` and `/auth/login`.
///
/// The backend may grow extra fields; only these two are contractual.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
}

/// Request body for `POST /medication/plans`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    pub user_id: String,
    pub medication_name: String,
    pub focus_areas: Vec<String>,
}

/// A generated medication plan as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicationPlan {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub user_id: serde_json::Value,
    pub medication_name: String,
    pub plan_content: String,
    #[serde(default)]
    pub created_at: serde_json::Value,
    pub focus_areas: Vec<String>,
}

/// Request body for `POST /medication/reviews`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub user_id: String,
    pub plan_id: String,
    /// RFC 3339 timestamp of the review.
    pub date: String,
    pub symptoms: String,
    pub side_effects: String,
    pub notes: String,
    pub rating: i32,
}

/// A stored medication review as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicationReview {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub user_id: serde_json::Value,
    pub plan_id: serde_json::Value,
    #[serde(default)]
    pub date: serde_json::Value,
    pub symptoms: String,
    pub side_effects: String,
    pub notes: String,
    pub rating: i32,
}

/// Extract an id string from an opaque identifier value.
///
/// Accepts both the extended-JSON ObjectId shape (`{"$oid": "..."}`) and a
/// plain string, which is what the auth endpoints return.
pub fn object_id(value: &serde_json::Value) -> Option<&str> {
    value
        .get("$oid")
        .and_then(serde_json::Value::as_str)
        .or_else(|| value.as_str())
}
