//! Axum route handler for the Career Gateway.

use std::time::Instant;

use axum::{
    extract::{rejection::BytesRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::errors::GatewayError;
use crate::gateway::envelope::decode_envelope;
use crate::gateway::service::{build_generation, generate, CareerResponse};
use crate::state::AppState;

/// POST /api/career
///
/// Accepts `{action, userData, careerName?}` and returns either the generated
/// document or `{"error": ...}`. The credential check runs before the body is
/// parsed, so a misconfigured deployment never touches the model.
///
/// Body extraction failures (e.g. over the size limit) are taken as a value so
/// they are reported in the same `{"error": ...}` shape, after the credential check.
pub async fn handle_career(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    let started = Instant::now();
    info!(
        %request_id,
        bytes = body.as_ref().map(|b| b.len()).unwrap_or(0),
        "Career request received"
    );

    match process(&state, request_id, &body).await {
        Ok(response) => {
            info!(
                %request_id,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Career request completed"
            );
            Json(response).into_response()
        }
        Err(err) => {
            let status = err.status();
            let elapsed_ms = started.elapsed().as_millis() as u64;
            if status.is_server_error() {
                error!(%request_id, status = status.as_u16(), elapsed_ms, error = %err, "Career request failed");
            } else {
                warn!(%request_id, status = status.as_u16(), elapsed_ms, error = %err, "Career request rejected");
            }
            err.into_response()
        }
    }
}

async fn process(
    state: &AppState,
    request_id: Uuid,
    body: &Result<Bytes, BytesRejection>,
) -> Result<CareerResponse, GatewayError> {
    let api_key = state
        .config
        .gemini_api_key
        .as_deref()
        .ok_or_else(|| GatewayError::Configuration("GEMINI_API_KEY is not set".to_string()))?;

    let body = body.as_ref().map_err(|rejection| {
        warn!(%request_id, status = rejection.status().as_u16(), "Request body rejected: {rejection}");
        GatewayError::MalformedRequest("request body could not be read".to_string())
    })?;

    let request = decode_envelope(body)?;
    let generation = build_generation(&request, &state.config.gemini_model);

    info!(
        %request_id,
        action = request.action().as_str(),
        model = %generation.model,
        "Dispatched to model"
    );

    generate(
        state.model.as_ref(),
        api_key,
        &generation,
        &request,
        state.config.model_deadline,
    )
    .await
}
