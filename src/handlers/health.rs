//! Service status HTTP handlers.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::server::AppState;

#[derive(Serialize)]
pub struct ApiStatus {
    message: String,
}

#[derive(Serialize)]
pub struct HealthStatus {
    status: String,
    message: String,
}

/// GET /
pub async fn root() -> Json<ApiStatus> {
    Json(ApiStatus {
        message: "Chatbot API is running!".to_string(),
    })
}

/// GET /health
///
/// Probes the model once and reports healthy/unhealthy. Always 200; the
/// verdict lives in the body.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    if state.responder.health_check().await {
        Json(HealthStatus {
            status: "healthy".to_string(),
            message: "All services are running".to_string(),
        })
    } else {
        Json(HealthStatus {
            status: "unhealthy".to_string(),
            message: "Bedrock service unavailable".to_string(),
        })
    }
}
