//! HTTP interface.
//!
//! Thin axum layer over the chat engine and the therapy recommender:
//! request shape checks live here, everything else is delegated to the
//! pipelines behind the shared context.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;
use validator::Validate;

use crate::artifacts::AppContext;
use crate::models::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, PredictRequest, PredictResponse,
};
use crate::therapy::FeatureRow;

/// Build the application router over the loaded context.
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/chat", post(chat))
        .route("/predict", post(predict))
        .with_state(context)
}

async fn healthz(State(context): State<Arc<AppContext>>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            artifacts: context.summary.clone(),
        }),
    )
}

async fn chat(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!(?request, "received chat request");

    let message = match request.message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => message,
        None => return Err(bad_request("No message provided")),
    };
    if request.user_id.as_deref().filter(|u| !u.is_empty()).is_none() {
        return Err(bad_request("No userId provided"));
    }

    let turn = context.chat.respond(message, &request.health_condition);
    Ok(Json(ChatResponse {
        response: turn.response,
    }))
}

async fn predict(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    debug!(?request, "received predict request");

    if let Err(err) = request.validate() {
        return Err(bad_request(&err.to_string()));
    }
    let features = match FeatureRow::from_request(&request) {
        Ok(features) => features,
        Err(err) => return Err(bad_request(&err.to_string())),
    };

    let recommendations = context.recommender.recommend(&features);
    Ok(Json(PredictResponse { recommendations }))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
