use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, warn};

use crate::api::{state::AppState, types::*};
use crate::error::NimbusError;

/// POST /predict
pub async fn predict_weather(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> std::result::Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .predictor
        .predict(req.precipitation, req.temp_max, req.temp_min, req.wind)
        .map(|result| Json(result.into()))
        .map_err(error_response)
}

fn error_response(err: NimbusError) -> (StatusCode, Json<ErrorResponse>) {
    let status = if err.is_client_error() {
        warn!(error = %err, "Rejected prediction request");
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        error!(error = %err, "Prediction failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
