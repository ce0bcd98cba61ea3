//! Site services - Read-only views over the wedding document

use crate::core::AppState;
use crate::date_utils::{TimeLeft, local_now};
use crate::dtos::{CountdownDTO, MetadataDTO, PublicWeddingDTO};
use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::instrument;

pub async fn wedding_config(State(state): State<Arc<AppState>>) -> Json<PublicWeddingDTO> {
    Json(PublicWeddingDTO::from(&state.site))
}

pub async fn site_metadata(State(state): State<Arc<AppState>>) -> Json<MetadataDTO> {
    Json(MetadataDTO::from(&state.site))
}

#[instrument(skip(state))]
pub async fn countdown(State(state): State<Arc<AppState>>) -> Json<CountdownDTO> {
    let left = TimeLeft::until(state.site.wedding_details.date, local_now());
    Json(CountdownDTO::from(left))
}
