//! Invitation services - PDF download and the placeholder RSVP endpoint

use crate::core::AppState;
use axum::{
    body::Bytes,
    extract::{Json, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info, instrument};

#[instrument(skip(state))]
pub async fn download_invitation(State(state): State<Arc<AppState>>) -> Response {
    let path = &state.settings.invitation_pdf_path;

    match tokio::fs::read(path).await {
        Ok(bytes) => {
            info!(size = bytes.len(), "Serving invitation PDF");
            let disposition = format!(
                "attachment; filename=\"{}\"",
                state.settings.invitation_filename
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!("Error serving PDF {}: {}", path.display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to download invitation" })),
            )
                .into_response()
        }
    }
}

/// Accepts any JSON body and answers with a fixed acknowledgement after a
/// simulated delay. Nothing is stored.
#[instrument(skip(state, body))]
pub async fn legacy_rsvp(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let data: Value = match serde_json::from_slice(&body) {
        Ok(data) => data,
        Err(e) => {
            error!("Error processing RSVP: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Failed to process RSVP" })),
            )
                .into_response();
        }
    };

    info!("RSVP data received: {}", data);
    sleep(state.settings.simulated_latency).await;

    Json(json!({ "success": true, "message": "Thank you for your RSVP!" })).into_response()
}
