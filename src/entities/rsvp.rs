//! RSVP entity - A single guest response

use super::enums::{Attendance, EntrySource};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdditionalGuest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub attending: Attendance,
    pub guest_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_guests: Vec<AdditionalGuest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Submission timestamp as shown to guests
    pub date: String,
    pub source: EntrySource,
}

impl RsvpEntry {
    /// Guests this entry adds to the headcount
    pub fn attending_guests(&self) -> u32 {
        if self.attending.is_attending() {
            self.guest_count
        } else {
            0
        }
    }

    pub fn badge(&self) -> String {
        match self.attending {
            Attendance::Yes => format!("Attending ({})", self.guest_count),
            Attendance::No => "Not Attending".to_string(),
        }
    }

    /// Up to two upper-case initials, one per name part
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

pub fn total_attending_guests(entries: &[RsvpEntry]) -> u32 {
    entries.iter().map(RsvpEntry::attending_guests).sum()
}
