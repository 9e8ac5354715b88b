use axum::{extract::State, Json};

use crate::api::{state::AppState, types::*};

/// GET / -- banner
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Weather prediction API is running!".to_string(),
    })
}

/// GET /health -- liveness check; artifacts are loaded before the server binds
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        classes: state.predictor.labels().len(),
        uptime_secs: state.uptime_seconds(),
    })
}

/// GET /classes -- label classes in encoder order
pub async fn get_classes(State(state): State<AppState>) -> Json<ClassesResponse> {
    Json(ClassesResponse {
        classes: state.predictor.labels().classes().to_vec(),
    })
}
