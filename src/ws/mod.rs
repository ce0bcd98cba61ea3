//! WebSocket Module - Live guest list updates
//!
//! Every connected view receives the update broadcasts (`RsvpUpdated`,
//! `GuestListRefreshed`) as JSON text frames. Nothing sent by the client is
//! interpreted besides close frames.

pub mod connection;

pub use connection::handle_socket;

use crate::AppState;
use axum::{
    extract::{State, ws::WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;

/// Idle read timeout of a connection
pub const TIMEOUT_DURATION_SECONDS: u64 = 300;

/// Upgrades `GET /rsvp/events` and hands the socket to `handle_socket`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}
