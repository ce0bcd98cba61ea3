//! Wedding site server library - exposes the modules for the binary and the tests

pub mod core;
pub mod date_utils;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod sync;
pub mod ws;

// Re-exports
pub use crate::core::{AppError, AppState, Config, config};
pub use services::root;

use axum::{
    Router,
    routing::{any, get, post, put},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Builds the application router; unknown paths fall back to the static site
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    let public_dir = state.settings.public_dir.clone();

    Router::new()
        .route("/", get(root))
        .merge(configure_site_routes())
        .merge(configure_rsvp_routes())
        .route("/invitation", get(download_invitation))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Wedding document, SEO metadata, countdown and the placeholder RSVP endpoint
fn configure_site_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/api/wedding", get(wedding_config))
        .route("/api/metadata", get(site_metadata))
        .route("/api/countdown", get(countdown))
        .route("/api/rsvp", post(legacy_rsvp))
}

/// RSVP flow and guest list
fn configure_rsvp_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/rsvp", post(submit_rsvp))
        .route("/rsvp/status", get(rsvp_status))
        .route("/rsvp/preview", post(preview_rsvp))
        .route("/rsvp/refresh", post(refresh_entries))
        .route("/rsvp/entries", get(list_entries))
        .route("/rsvp/entries/{id}", put(update_entry).delete(delete_entry))
        .route("/rsvp/events", any(ws::ws_handler))
}
