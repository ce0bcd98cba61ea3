//! Application State - Shared state of the wedding site
//!
//! Holds the settings, the wedding document, both RSVP data sources, the
//! displayed guest list and the update broadcast channel.

use crate::core::config::Config;
use crate::core::guest_list::GuestList;
use crate::dtos::WsEventDTO;
use crate::entities::WeddingConfig;
use crate::repositories::{LocalCache, RemoteError, SheetClient};
use tokio::sync::broadcast;
use tracing::debug;

/// Capacity of the update channel; slower subscribers skip what they missed
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Shared by every route, background task and WebSocket connection
pub struct AppState {
    pub settings: Config,

    /// Read-only wedding document
    pub site: WeddingConfig,

    /// Persisted copy of submitted entries
    pub cache: LocalCache,

    /// Form endpoint and spreadsheet reader
    pub remote: SheetClient,

    /// Entries currently on display
    pub guest_list: GuestList,

    /// Update broadcasts: WebSocket views and the refresh listener subscribe here
    pub events: broadcast::Sender<WsEventDTO>,
}

impl AppState {
    pub fn new(settings: Config, site: WeddingConfig) -> Result<Self, RemoteError> {
        let remote = SheetClient::new(&site.rsvp_config, settings.remote_timeout)?;
        let cache = LocalCache::new(&settings.cache_dir, &site.rsvp_config.storage_key);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            settings,
            site,
            cache,
            remote,
            guest_list: GuestList::new(),
            events,
        })
    }

    /// Sends an event to every subscriber, having none is not an error
    pub fn broadcast(&self, event: WsEventDTO) {
        match self.events.send(event) {
            Ok(receivers) => debug!(receivers, "Event broadcast"),
            Err(_) => debug!("Event dropped, no subscribers"),
        }
    }
}
