use super::types::{ErrorResponse, PredictRequest};
use crate::inference::{AnalysisResult, InferenceClient, InferenceError};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn InferenceClient>,
    pub max_text_len: usize,
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorResponse>)> {
    // Shape errors (malformed JSON, missing or non-string `text`) are all
    // the client's fault; none of them reach the inference service.
    let Json(request) = payload.map_err(|rejection| {
        info!("Rejected malformed predict request: {}", rejection);
        invalid_input()
    })?;

    if request.text.trim().is_empty() {
        info!("Rejected predict request with empty text");
        return Err(invalid_input());
    }

    if request.text.chars().count() > state.max_text_len {
        info!(
            "Rejected predict request over the {} character limit",
            state.max_text_len
        );
        return Err(invalid_input());
    }

    // Text is forwarded as submitted; trimming above is validation only
    match state.client.analyze(&request.text).await {
        Ok(result) => {
            info!(
                "Returning sentiment {} (score {})",
                result.sentiment, result.score
            );
            Ok(Json(result))
        }
        Err(e) => {
            error!("Inference request failed: {}", e);
            Err(upstream_error(&e))
        }
    }
}

fn invalid_input() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "request body must be a JSON object with a non-empty 'text' string".to_string(),
        }),
    )
}

/// Map a classified upstream failure to a status and a generic message.
/// The diagnostic inside the error is logged by the caller, never returned.
fn upstream_error(err: &InferenceError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match err {
        InferenceError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "inference service timed out"),
        InferenceError::Unreachable(_) => {
            (StatusCode::BAD_GATEWAY, "inference service unavailable")
        }
        InferenceError::BadResponse(_) => (
            StatusCode::BAD_GATEWAY,
            "inference service returned an invalid response",
        ),
    };

    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
