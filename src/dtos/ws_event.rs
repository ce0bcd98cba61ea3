//! WebSocket Event DTOs - Update broadcasts

use crate::entities::ListOrigin;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryAction {
    Created,
    Updated,
    Deleted,
}

/// Tagged union of broadcast events.
/// Serde serializes this as:
/// { "type": "RsvpUpdated", "data": { "entryId": ..., "action": "created" } }
/// or
/// { "type": "GuestListRefreshed", "data": { "count": ..., ... } }
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all_fields = "camelCase")]
pub enum WsEventDTO {
    /// An entry was created, edited or deleted
    RsvpUpdated { entry_id: String, action: EntryAction },
    /// The displayed list was replaced
    GuestListRefreshed {
        count: usize,
        total_guests: u32,
        origin: ListOrigin,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_are_tagged_with_type_and_data() {
        let event = WsEventDTO::RsvpUpdated {
            entry_id: "abc".to_string(),
            action: EntryAction::Created,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "type": "RsvpUpdated", "data": { "entryId": "abc", "action": "created" } })
        );

        let event = WsEventDTO::GuestListRefreshed {
            count: 3,
            total_guests: 5,
            origin: ListOrigin::Cache,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "type": "GuestListRefreshed", "data": { "count": 3, "totalGuests": 5, "origin": "cache" } })
        );
    }
}
