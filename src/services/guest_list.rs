//! Guest list services - Filtered read and manual refresh

use crate::core::AppState;
use crate::dtos::{AttendanceFilter, GuestListDTO, GuestListQuery, Notice, RefreshResponseDTO};
use crate::sync::refresh_guest_list;
use axum::extract::{Json, Query, State};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GuestListQuery>,
) -> Json<GuestListDTO> {
    let snapshot = state.guest_list.snapshot().await;
    let dto = snapshot.to_dto(query.search.as_deref(), query.filter);
    debug!(shown = dto.entries.len(), of = snapshot.entries.len(), "Guest list read");
    Json(dto)
}

#[instrument(skip(state))]
pub async fn refresh_entries(State(state): State<Arc<AppState>>) -> Json<RefreshResponseDTO> {
    let outcome = refresh_guest_list(&state).await;

    let notice = if outcome.fetched {
        Notice::info(
            "Guest list updated",
            format!("{} responses loaded successfully.", outcome.snapshot.entries.len()),
        )
    } else {
        Notice::destructive(
            "Failed to update",
            "Could not load the latest guest list. Please try again.",
        )
    };

    Json(RefreshResponseDTO {
        guest_list: outcome.snapshot.to_dto(None, AttendanceFilter::All),
        notice,
    })
}
