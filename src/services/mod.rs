//! Services module - HTTP handlers grouped by feature

pub mod guest_list;
pub mod invitation;
pub mod rsvp;
pub mod site;

// Re-exports
pub use guest_list::{list_entries, refresh_entries};
pub use invitation::{download_invitation, legacy_rsvp};
pub use rsvp::{delete_entry, preview_rsvp, rsvp_status, submit_rsvp, update_entry};
pub use site::{countdown, site_metadata, wedding_config};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
