//! Integration tests for the guest list
//!
//! - Refresh from the remote sheet, fallback to the local cache, empty state
//! - Search and attendance filter
//! - Refresh listener and its broadcast loop guard

mod common;

#[cfg(test)]
mod guest_list_tests {
    use super::common::*;
    use serde_json::{Value, json};
    use std::time::Duration;
    use wedding_site::dtos::WsEventDTO;
    use wedding_site::entities::ListOrigin;
    use wedding_site::sync::start_refresh_listener;

    #[tokio::test]
    async fn test_refresh_loads_remote_rows() {
        let ctx = open_context().await;

        let response = ctx.server.post("/rsvp/refresh").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["notice"]["title"], "Guest list updated");
        assert_eq!(body["notice"]["description"], "2 responses loaded successfully.");
        assert_eq!(body["notice"]["variant"], "default");

        let list = &body["guestList"];
        assert_eq!(list["origin"], "remote");
        assert_eq!(list["totalGuests"], 2);
        assert_eq!(list["counts"], json!({ "responses": 2, "attending": 1, "notAttending": 1 }));
        assert_eq!(list["entries"][0]["id"], "api-0-jane@example.com");
        assert_eq!(list["entries"][0]["source"], "api");
        assert_eq!(list["entries"][0]["initials"], "JD");
        assert_eq!(list["entries"][0]["additionalGuests"][0]["name"], "Sam Doe");
        assert_eq!(list["entries"][1]["badge"], "Not Attending");
        assert!(list["entries"][1].get("guestCount").is_none());
    }

    #[tokio::test]
    async fn test_refresh_replaces_local_entries_wholesale() {
        let ctx = open_context().await;

        ctx.server
            .post("/rsvp")
            .json(&attending_form("Local Only", "local@example.com", 3))
            .await;
        assert_eq!(ctx.state.guest_list.total_guests().await, 3);

        ctx.server.post("/rsvp/refresh").await.assert_status_ok();

        let snapshot = ctx.state.guest_list.snapshot().await;
        assert_eq!(snapshot.entries.len(), 2);
        assert!(snapshot.entries.iter().all(|e| e.name != "Local Only"));
        assert_eq!(snapshot.total_guests, 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_falls_back_to_cache() {
        let ctx = open_context().await;
        ctx.server
            .post("/rsvp")
            .json(&attending_form("Cached Guest", "cached@example.com", 2))
            .await;
        ctx.sheet.fail();

        let body = ctx.server.post("/rsvp/refresh").await.json::<Value>();
        assert_eq!(body["notice"]["title"], "Failed to update");
        assert_eq!(body["notice"]["variant"], "destructive");

        let list = &body["guestList"];
        assert_eq!(list["origin"], "cache");
        assert_eq!(list["lastError"], "Failed to load entries. Please try again.");
        assert_eq!(list["entries"][0]["name"], "Cached Guest");
        assert_eq!(list["totalGuests"], 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_without_cache_is_empty() {
        let ctx = open_context().await;
        ctx.sheet.fail();

        let body = ctx.server.post("/rsvp/refresh").await.json::<Value>();
        let list = &body["guestList"];
        assert_eq!(list["origin"], "empty");
        assert_eq!(list["empty"], true);
        assert_eq!(list["emptyMessage"], "No guests have RSVP'd yet");
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_treated_as_empty() {
        let ctx = open_context().await;
        let path = ctx.state.cache.path().to_path_buf();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();
        ctx.sheet.fail();

        let body = ctx.server.post("/rsvp/refresh").await.json::<Value>();
        assert_eq!(body["guestList"]["origin"], "empty");

        // a submission still goes through and overwrites the payload
        ctx.server
            .post("/rsvp")
            .json(&attending_form("Fresh Start", "fresh@example.com", 1))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Fresh Start"));
    }

    #[tokio::test]
    async fn test_sheet_with_header_only_counts_as_failure() {
        let ctx = open_context().await;
        ctx.sheet.set_rows(json!([["Full Name", "Email"]]));

        let body = ctx.server.post("/rsvp/refresh").await.json::<Value>();
        assert_eq!(body["notice"]["title"], "Failed to update");
    }

    #[tokio::test]
    async fn test_entries_search_and_filter() {
        let ctx = open_context().await;
        ctx.server.post("/rsvp/refresh").await.assert_status_ok();

        let body = ctx
            .server
            .get("/rsvp/entries")
            .add_query_param("search", "JOHN")
            .await
            .json::<Value>();
        assert_eq!(body["entries"].as_array().unwrap().len(), 1);
        assert_eq!(body["entries"][0]["name"], "John Roe");
        // totals ignore the filter
        assert_eq!(body["totalGuests"], 2);
        assert_eq!(body["counts"]["responses"], 2);

        let body = ctx
            .server
            .get("/rsvp/entries")
            .add_query_param("filter", "not-attending")
            .await
            .json::<Value>();
        assert_eq!(body["entries"].as_array().unwrap().len(), 1);
        assert_eq!(body["entries"][0]["attending"], "no");

        let body = ctx
            .server
            .get("/rsvp/entries")
            .add_query_param("search", "example.com")
            .add_query_param("filter", "attending")
            .await
            .json::<Value>();
        assert_eq!(body["entries"].as_array().unwrap().len(), 1);
        assert_eq!(body["entries"][0]["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_refresh_listener_reacts_to_updates_only() {
        let ctx = open_context().await;
        let mut events = ctx.state.events.subscribe();
        start_refresh_listener(ctx.state.clone());

        ctx.server
            .post("/rsvp")
            .json(&attending_form("Listener Test", "listener@example.com", 1))
            .await;

        let mut refreshes = 0;
        let mut updates = 0;
        // one update triggers exactly one refresh, the refresh event triggers nothing
        while let Ok(Ok(event)) =
            tokio::time::timeout(Duration::from_millis(500), events.recv()).await
        {
            match event {
                WsEventDTO::RsvpUpdated { .. } => updates += 1,
                WsEventDTO::GuestListRefreshed { origin, .. } => {
                    assert_eq!(origin, ListOrigin::Remote);
                    refreshes += 1;
                }
            }
        }
        assert_eq!(updates, 1);
        assert_eq!(refreshes, 1);
        assert_eq!(ctx.state.guest_list.snapshot().await.origin, ListOrigin::Remote);
    }
}
