//! Guest list DTOs - Displayed list, filters and notices

use crate::entities::{AdditionalGuest, Attendance, EntrySource, ListOrigin, RsvpEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const EMPTY_LIST_MESSAGE: &str = "No guests have RSVP'd yet";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceFilter {
    #[default]
    All,
    Attending,
    NotAttending,
}

impl AttendanceFilter {
    pub fn matches(&self, entry: &RsvpEntry) -> bool {
        match self {
            AttendanceFilter::All => true,
            AttendanceFilter::Attending => entry.attending == Attendance::Yes,
            AttendanceFilter::NotAttending => entry.attending == Attendance::No,
        }
    }
}

/// Query parameters of `GET /rsvp/entries?search=jane&filter=attending`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct GuestListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub filter: AttendanceFilter,
}

/// An entry as shown in the guest list
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EntryViewDTO {
    pub id: String,
    pub name: String,
    pub email: String,
    pub attending: Attendance,
    /// Only shown for guests who attend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_guests: Vec<AdditionalGuest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_request: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub date: String,
    pub source: EntrySource,
    pub badge: String,
    pub initials: String,
}

impl From<&RsvpEntry> for EntryViewDTO {
    fn from(value: &RsvpEntry) -> Self {
        let attending = value.attending.is_attending();
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            email: value.email.clone(),
            attending: value.attending,
            guest_count: attending.then_some(value.guest_count),
            additional_guests: value.additional_guests.clone(),
            dietary_restrictions: value.dietary_restrictions.clone().filter(|_| attending),
            song_request: value.song_request.clone().filter(|_| attending),
            message: value.message.clone(),
            date: value.date.clone(),
            source: value.source,
            badge: value.badge(),
            initials: value.initials(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCounts {
    pub responses: usize,
    pub attending: usize,
    pub not_attending: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GuestListDTO {
    pub entries: Vec<EntryViewDTO>,
    /// Headcount over the whole list, filters excluded
    pub total_guests: u32,
    pub counts: ResponseCounts,
    pub origin: ListOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed_at: Option<DateTime<Utc>>,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    /// Succeeded, but something the guest should know about went wrong
    Warning,
    Destructive,
}

/// Transient notification shown to the guest
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Warning,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponseDTO {
    pub guest_list: GuestListDTO,
    pub notice: Notice,
}

/// Answer to an edit or a delete
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponseDTO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntryViewDTO>,
    pub total_guests: u32,
    pub notice: Notice,
}
