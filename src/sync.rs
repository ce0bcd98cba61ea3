//! Guest list synchronisation with the remote spreadsheet
//!
//! A refresh replaces the displayed list with the remote rows, or with the
//! local cache when the remote source is unavailable. It runs at start-up,
//! on demand, after every update broadcast (refresh listener) and once after
//! each submission (delayed re-fetch).

use crate::core::{AppState, GuestListSnapshot};
use crate::dtos::WsEventDTO;
use crate::entities::ListOrigin;
use crate::repositories::ReadAll;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

/// Kept as `lastError` on the list when the remote fetch fails
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to load entries. Please try again.";

#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub snapshot: GuestListSnapshot,
    /// `false` when the list was rebuilt from the cache or left empty
    pub fetched: bool,
}

#[instrument(skip(state))]
pub async fn refresh_guest_list(state: &AppState) -> RefreshOutcome {
    let outcome = match state.remote.fetch_entries().await {
        Ok(entries) => {
            info!("Fetched {} entries from remote source", entries.len());
            let snapshot = state
                .guest_list
                .replace(entries, ListOrigin::Remote, None)
                .await;
            RefreshOutcome {
                snapshot,
                fetched: true,
            }
        }
        Err(e) => {
            warn!("Error fetching RSVP entries: {}", e);
            let (entries, origin) = match state.cache.read_all().await {
                Ok(Some(entries)) => {
                    info!("Falling back to {} cached entries", entries.len());
                    (entries, ListOrigin::Cache)
                }
                Ok(None) => (Vec::new(), ListOrigin::Empty),
                Err(e) => {
                    error!("Failed to load saved entries: {}", e);
                    (Vec::new(), ListOrigin::Empty)
                }
            };
            let snapshot = state
                .guest_list
                .replace(entries, origin, Some(REFRESH_FAILED_MESSAGE.to_string()))
                .await;
            RefreshOutcome {
                snapshot,
                fetched: false,
            }
        }
    };

    state.broadcast(WsEventDTO::GuestListRefreshed {
        count: outcome.snapshot.entries.len(),
        total_guests: outcome.snapshot.total_guests,
        origin: outcome.snapshot.origin,
    });

    outcome
}

/// Re-fetches the guest list on every `RsvpUpdated` broadcast.
///
/// `GuestListRefreshed` is ignored, a refresh never triggers another one.
pub fn start_refresh_listener(state: Arc<AppState>) -> JoinHandle<()> {
    // subscribe before spawning so no event sent after this call is missed
    let mut events = state.events.subscribe();

    tokio::spawn(async move {
        info!("Refresh listener started");
        loop {
            match events.recv().await {
                Ok(WsEventDTO::RsvpUpdated { entry_id, action }) => {
                    debug!(%entry_id, ?action, "Update received, refreshing guest list");
                    refresh_guest_list(&state).await;
                }
                Ok(WsEventDTO::GuestListRefreshed { .. }) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Refresh listener lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
        info!("Refresh listener stopped");
    })
}

/// One refresh after the configured delay, giving the spreadsheet time to
/// pick up a submission. Returns `None` when the delay is disabled.
pub fn schedule_delayed_refresh(state: Arc<AppState>) -> Option<JoinHandle<()>> {
    let delay = state.settings.refresh_delay?;
    debug!(delay_secs = delay.as_secs(), "Delayed refresh scheduled");

    Some(tokio::spawn(async move {
        sleep(delay).await;
        refresh_guest_list(&state).await;
    }))
}
