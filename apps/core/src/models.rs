use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::artifacts::ArtifactSummary;

/// Represents an inbound chat message.
///
/// `message` and `userId` are required, but modeled as options so the handler
/// can answer with the field-specific error messages clients rely on instead
/// of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user's free-text query.
    pub message: Option<String>,
    /// Identifier of the requesting user.
    pub user_id: Option<String>,
    /// Caller-declared health condition tag; "general" when none applies.
    #[serde(default = "default_health_condition")]
    pub health_condition: String,
}

fn default_health_condition() -> String {
    "general".to_string()
}

/// Represents a successful chat reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The selected response text.
    pub response: String,
}

/// Error payload shared by all endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Represents an inbound therapy prediction request.
///
/// Categorical fields fall back to fixed defaults when absent; numeric fields
/// are validated instead of silently defaulted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PredictRequest {
    /// Age in years.
    #[serde(default)]
    #[validate(range(max = 120))]
    pub age: u32,
    /// Gender label; unmapped values fall back to a fixed category.
    #[serde(default = "default_gender")]
    pub gender: String,
    /// Health condition label; unmapped values fall back to a fixed category.
    #[serde(default = "default_predict_condition")]
    pub health_condition: String,
    /// Body weight in kilograms.
    #[serde(default)]
    #[validate(range(min = 1.0, max = 400.0))]
    pub weight: f64,
    /// Height in centimeters.
    #[serde(default)]
    #[validate(range(min = 1.0, max = 250.0))]
    pub height: f64,
    /// Exercise frequency label; unmapped values fall back to a fixed category.
    #[serde(default = "default_exercise_frequency")]
    pub exercise_frequency: String,
}

fn default_gender() -> String {
    "Male".to_string()
}

fn default_predict_condition() -> String {
    "Healthy".to_string()
}

fn default_exercise_frequency() -> String {
    "Daily".to_string()
}

/// Represents the therapy recommendation reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Deduplicated therapy labels, one per distinct classifier outcome.
    pub recommendations: Vec<String>,
}

/// Liveness payload with the artifact shape summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub artifacts: ArtifactSummary,
}
