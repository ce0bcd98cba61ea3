//! RSVP DTOs - Form input, confirmation summary and submission response

use crate::core::{AppError, FieldErrors, collect_field_errors};
use crate::dtos::{EntryViewDTO, Notice};
use crate::entities::{AdditionalGuest, Attendance, EntrySource, RsvpEntry};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

lazy_static! {
    /// local@domain.tld, no whitespace
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

const MIN_NAME_LENGTH: usize = 2;

/// Guest count as typed in the form: either `"2"` or `2`
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum GuestCountInput {
    Number(i64),
    Text(String),
    /// Fractions, huge numbers, anything else; reported as not a number
    Other(serde_json::Value),
}

impl GuestCountInput {
    fn parse(&self) -> Option<i64> {
        match self {
            GuestCountInput::Number(n) => Some(*n),
            GuestCountInput::Text(text) => text.trim().parse().ok(),
            GuestCountInput::Other(_) => None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AdditionalGuestDTO {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relationship: Option<String>,
}

/// Body of `POST /rsvp`, `POST /rsvp/preview` and `PUT /rsvp/entries/{id}`
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RsvpFormDTO {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    #[validate(regex(path = *EMAIL_PATTERN, message = "Please enter a valid email address"))]
    pub email: String,

    /// `yes` or `no`
    #[serde(default)]
    pub attending: Option<String>,

    #[serde(default)]
    pub guest_count: Option<GuestCountInput>,

    #[serde(default)]
    pub additional_guests: Vec<AdditionalGuestDTO>,

    #[serde(default)]
    pub dietary_restrictions: Option<String>,
    #[serde(default)]
    pub song_request: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Validated and normalised form content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpSubmission {
    pub name: String,
    pub email: String,
    pub attending: Attendance,
    pub guest_count: u32,
    pub additional_guests: Vec<AdditionalGuest>,
    pub dietary_restrictions: Option<String>,
    pub song_request: Option<String>,
    pub message: Option<String>,
}

fn add_error(fields: &mut FieldErrors, field: impl Into<String>, message: impl Into<String>) {
    fields.entry(field.into()).or_default().push(message.into());
}

fn is_long_enough(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LENGTH
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl RsvpFormDTO {
    /// Runs the field rules, then the guest count bound which depends on configuration.
    ///
    /// Names are checked after trimming. Guest count, additional guests,
    /// dietary notes and song request only matter for guests who attend; they
    /// are dropped otherwise, and only the kept additional guests are checked.
    pub fn into_submission(self, max_guest_count: u32) -> Result<RsvpSubmission, AppError> {
        let mut fields = FieldErrors::new();
        if let Err(errors) = self.validate() {
            collect_field_errors("", &errors, &mut fields);
        }

        if !is_long_enough(&self.name) {
            add_error(&mut fields, "name", "Name must be at least 2 characters");
        }

        let attending = match self.attending.as_deref().map(Attendance::from_str) {
            Some(Ok(attending)) => Some(attending),
            _ => {
                add_error(&mut fields, "attending", "Please select if you're attending");
                None
            }
        };

        let mut guest_count = 1;
        if attending == Some(Attendance::Yes) {
            match self.guest_count.as_ref().and_then(GuestCountInput::parse) {
                None => add_error(&mut fields, "guestCount", "Please enter a valid number"),
                Some(n) if n < 1 => add_error(&mut fields, "guestCount", "Minimum 1 guest"),
                Some(n) if n > i64::from(max_guest_count) => add_error(
                    &mut fields,
                    "guestCount",
                    format!("Maximum {} guests", max_guest_count),
                ),
                Some(n) => guest_count = n as u32,
            }

            for (index, guest) in self
                .additional_guests
                .iter()
                .take(guest_count as usize - 1)
                .enumerate()
            {
                if !is_long_enough(&guest.name) {
                    add_error(
                        &mut fields,
                        format!("additionalGuests[{}].name", index),
                        "Guest name must be at least 2 characters",
                    );
                }
            }
        }

        if !fields.is_empty() {
            return Err(AppError::validation(fields));
        }
        let attending = attending.unwrap_or(Attendance::No);

        let submission = if attending.is_attending() {
            RsvpSubmission {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                attending,
                guest_count,
                additional_guests: self
                    .additional_guests
                    .into_iter()
                    .take(guest_count as usize - 1)
                    .map(|guest| AdditionalGuest {
                        name: guest.name.trim().to_string(),
                        relationship: trimmed(guest.relationship),
                    })
                    .collect(),
                dietary_restrictions: trimmed(self.dietary_restrictions),
                song_request: trimmed(self.song_request),
                message: trimmed(self.message),
            }
        } else {
            RsvpSubmission {
                name: self.name.trim().to_string(),
                email: self.email.trim().to_string(),
                attending,
                guest_count: 1,
                additional_guests: Vec::new(),
                dietary_restrictions: None,
                song_request: None,
                message: trimmed(self.message),
            }
        };

        Ok(submission)
    }
}

impl RsvpSubmission {
    pub fn into_entry(self, id: String, date: String, source: EntrySource) -> RsvpEntry {
        RsvpEntry {
            id,
            name: self.name,
            email: self.email,
            attending: self.attending,
            guest_count: self.guest_count,
            additional_guests: self.additional_guests,
            dietary_restrictions: self.dietary_restrictions,
            song_request: self.song_request,
            message: self.message,
            date,
            source,
        }
    }
}

/// Confirmation summary shown before the submission is sent
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSummaryDTO {
    pub name: String,
    pub email: String,
    pub attending: Attendance,
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
}

impl From<&RsvpSubmission> for RsvpSummaryDTO {
    fn from(value: &RsvpSubmission) -> Self {
        Self {
            name: value.name.clone(),
            email: value.email.clone(),
            attending: value.attending,
            guest_count: value.attending.is_attending().then_some(value.guest_count),
            additional_guests: value.additional_guests.clone(),
            dietary_restrictions: value.dietary_restrictions.clone(),
            song_request: value.song_request.clone(),
            message: value.message.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseDTO {
    pub entry: EntryViewDTO,
    pub total_guests: u32,
    pub notice: Notice,
}
