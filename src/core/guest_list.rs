//! Guest List - In-memory list of RSVP entries on display
//!
//! The list is replaced wholesale on every refresh; between refreshes it only
//! changes through optimistic prepends and edits/deletes by id.

use crate::dtos::guest_list::EMPTY_LIST_MESSAGE;
use crate::dtos::{AttendanceFilter, EntryViewDTO, GuestListDTO, ResponseCounts};
use crate::entities::{Attendance, ListOrigin, RsvpEntry, total_attending_guests};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Default)]
pub struct GuestListSnapshot {
    pub entries: Vec<RsvpEntry>,
    pub total_guests: u32,
    pub origin: ListOrigin,
    pub last_error: Option<String>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl GuestListSnapshot {
    /// Applies search and attendance filter, counts stay computed on the whole list
    pub fn to_dto(&self, search: Option<&str>, filter: AttendanceFilter) -> GuestListDTO {
        let entries: Vec<EntryViewDTO> = filter_entries(&self.entries, search, filter)
            .into_iter()
            .map(EntryViewDTO::from)
            .collect();
        let empty = self.entries.is_empty();

        GuestListDTO {
            entries,
            total_guests: self.total_guests,
            counts: count_responses(&self.entries),
            origin: self.origin,
            last_error: self.last_error.clone(),
            refreshed_at: self.refreshed_at,
            empty,
            empty_message: empty.then(|| EMPTY_LIST_MESSAGE.to_string()),
        }
    }
}

pub struct GuestList {
    inner: RwLock<GuestListSnapshot>,
}

impl Default for GuestList {
    fn default() -> Self {
        Self::new()
    }
}

impl GuestList {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(GuestListSnapshot::default()),
        }
    }

    pub async fn snapshot(&self) -> GuestListSnapshot {
        self.inner.read().await.clone()
    }

    pub async fn total_guests(&self) -> u32 {
        self.inner.read().await.total_guests
    }

    /// Replaces the whole list, no merge with what was displayed before
    #[instrument(skip(self, entries, last_error), fields(count = entries.len()))]
    pub async fn replace(
        &self,
        entries: Vec<RsvpEntry>,
        origin: ListOrigin,
        last_error: Option<String>,
    ) -> GuestListSnapshot {
        let mut guard = self.inner.write().await;
        guard.total_guests = total_attending_guests(&entries);
        guard.entries = entries;
        guard.origin = origin;
        guard.last_error = last_error;
        guard.refreshed_at = Some(Utc::now());
        info!(total_guests = guard.total_guests, "Guest list replaced");
        guard.clone()
    }

    /// Optimistic insert of a freshly submitted entry, returns the new total
    pub async fn prepend(&self, entry: RsvpEntry) -> u32 {
        let mut guard = self.inner.write().await;
        guard.total_guests += entry.attending_guests();
        guard.entries.insert(0, entry);
        debug!(total_guests = guard.total_guests, "Entry prepended to guest list");
        guard.total_guests
    }

    /// Replaces the entry with the same id, returns the new total if it was found
    pub async fn update(&self, entry: &RsvpEntry) -> Option<u32> {
        let mut guard = self.inner.write().await;
        let slot = guard.entries.iter_mut().find(|e| e.id == entry.id)?;
        *slot = entry.clone();
        guard.total_guests = total_attending_guests(&guard.entries);
        Some(guard.total_guests)
    }

    /// Removes the entry with the given id, returns the new total if it was found
    pub async fn remove(&self, id: &str) -> Option<u32> {
        let mut guard = self.inner.write().await;
        let position = guard.entries.iter().position(|e| e.id == id)?;
        guard.entries.remove(position);
        guard.total_guests = total_attending_guests(&guard.entries);
        Some(guard.total_guests)
    }

    pub async fn find(&self, id: &str) -> Option<RsvpEntry> {
        self.inner
            .read()
            .await
            .entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }
}

/// Case-insensitive search on name or email, then the attendance filter
pub fn filter_entries<'a>(
    entries: &'a [RsvpEntry],
    search: Option<&str>,
    filter: AttendanceFilter,
) -> Vec<&'a RsvpEntry> {
    let term = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    entries
        .iter()
        .filter(|entry| match &term {
            Some(term) => {
                entry.name.to_lowercase().contains(term.as_str())
                    || entry.email.to_lowercase().contains(term.as_str())
            }
            None => true,
        })
        .filter(|entry| filter.matches(entry))
        .collect()
}

pub fn count_responses(entries: &[RsvpEntry]) -> ResponseCounts {
    let attending = entries
        .iter()
        .filter(|e| e.attending == Attendance::Yes)
        .count();
    ResponseCounts {
        responses: entries.len(),
        attending,
        not_attending: entries.len() - attending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntrySource;

    fn entry(id: &str, name: &str, attending: Attendance, guest_count: u32) -> RsvpEntry {
        RsvpEntry {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            attending,
            guest_count,
            additional_guests: Vec::new(),
            dietary_restrictions: None,
            song_request: None,
            message: None,
            date: "1/1/2027, 10:00:00 AM".to_string(),
            source: EntrySource::Api,
        }
    }

    #[tokio::test]
    async fn prepend_adds_guests_only_when_attending() {
        let list = GuestList::new();
        list.replace(vec![entry("a", "Ann Lee", Attendance::Yes, 2)], ListOrigin::Remote, None)
            .await;

        assert_eq!(list.prepend(entry("b", "Bob Ray", Attendance::No, 3)).await, 2);
        assert_eq!(list.prepend(entry("c", "Cy Tan", Attendance::Yes, 4)).await, 6);

        let snapshot = list.snapshot().await;
        let ids: Vec<&str> = snapshot.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn replace_discards_previous_entries() {
        let list = GuestList::new();
        list.prepend(entry("local", "Local Guest", Attendance::Yes, 2)).await;

        let snapshot = list
            .replace(vec![entry("api-0", "Remote Guest", Attendance::Yes, 1)], ListOrigin::Remote, None)
            .await;
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.total_guests, 1);
        assert!(list.find("local").await.is_none());
    }

    #[tokio::test]
    async fn update_and_remove_only_touch_matching_id() {
        let list = GuestList::new();
        list.replace(
            vec![
                entry("a", "Ann Lee", Attendance::Yes, 2),
                entry("b", "Bob Ray", Attendance::Yes, 1),
            ],
            ListOrigin::Cache,
            None,
        )
        .await;

        let mut edited = entry("b", "Bob Ray", Attendance::No, 1);
        edited.message = Some("Sorry!".to_string());
        assert_eq!(list.update(&edited).await, Some(2));
        assert_eq!(list.find("a").await.unwrap(), entry("a", "Ann Lee", Attendance::Yes, 2));

        assert_eq!(list.remove("a").await, Some(0));
        assert_eq!(list.remove("a").await, None);
        assert_eq!(list.snapshot().await.entries.len(), 1);
    }

    #[test]
    fn search_and_filter_combine() {
        let entries = vec![
            entry("jane", "Jane Doe", Attendance::Yes, 2),
            entry("john", "John Doe", Attendance::No, 1),
            entry("ann", "Ann Lee", Attendance::Yes, 1),
        ];

        let names = |search: Option<&str>, filter| -> Vec<String> {
            filter_entries(&entries, search, filter)
                .into_iter()
                .map(|e| e.name.clone())
                .collect()
        };

        assert_eq!(names(Some("DOE"), AttendanceFilter::All), vec!["Jane Doe", "John Doe"]);
        assert_eq!(names(Some("doe"), AttendanceFilter::Attending), vec!["Jane Doe"]);
        assert_eq!(names(None, AttendanceFilter::NotAttending), vec!["John Doe"]);
        assert_eq!(names(Some("ann@"), AttendanceFilter::All), vec!["Ann Lee"]);
        assert_eq!(names(Some("  "), AttendanceFilter::All).len(), 3);
    }

    #[test]
    fn empty_snapshot_reports_empty_state() {
        let dto = GuestListSnapshot::default().to_dto(None, AttendanceFilter::All);
        assert!(dto.empty);
        assert_eq!(dto.empty_message.as_deref(), Some(EMPTY_LIST_MESSAGE));
        assert_eq!(dto.counts, ResponseCounts::default());
    }
}
