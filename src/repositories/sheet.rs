//! SheetClient - Remote source of the guest list
//!
//! Submissions go to the form-processing endpoint as url-encoded form posts,
//! the guest list comes back from the script endpoint as a 2-D array of cells
//! (header row followed by data rows).

use super::RemoteError;
use crate::entities::{
    AdditionalGuest, Attendance, EntrySource, FormFields, RsvpConfig, RsvpEntry,
};
use chrono::{DateTime, Utc};
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

// Column headers of the spreadsheet, matched exactly
const COL_NAME: &str = "Full Name";
const COL_EMAIL: &str = "Email";
const COL_ATTENDING: &str = "Attending";
const COL_GUEST_COUNT: &str = "Number Of Guests";
const COL_ADDITIONAL_GUESTS: &str = "Additional Guests";
const COL_DIETARY: &str = "Dietary Restrictions";
const COL_SONG: &str = "Song Request";
const COL_MESSAGE: &str = "Message";
const COL_TIMESTAMP: &str = "Timestamp";

// Form fields without a configurable id
const FIELD_ATTENDING: &str = "entry.attending";
const FIELD_ADDITIONAL_GUESTS: &str = "entry.additionalGuests";
const FIELD_DIETARY: &str = "entry.dietaryRestrictions";
const FIELD_SONG: &str = "entry.songRequest";

#[derive(Deserialize)]
struct SheetPayload {
    #[serde(rename = "GoogleSheetData", default)]
    rows: Vec<Vec<Value>>,
}

pub struct SheetClient {
    http: reqwest::Client,
    form_url: String,
    script_url: String,
    fields: FormFields,
}

impl SheetClient {
    pub fn new(rsvp: &RsvpConfig, timeout: Duration) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            form_url: rsvp.google_form_url.clone(),
            script_url: rsvp.google_script_url.clone(),
            fields: rsvp.form_fields.clone(),
        })
    }

    /// Fetches the guest list, header row mapped onto entry fields
    #[instrument(skip(self))]
    pub async fn fetch_entries(&self) -> Result<Vec<RsvpEntry>, RemoteError> {
        debug!("Fetching guest list from remote source");
        let response = self
            .http
            .get(&self.script_url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Remote source answered with {}", response.status());
            return Err(RemoteError::Status(response.status()));
        }

        let payload: SheetPayload = response.json().await?;
        let entries = entries_from_rows(&payload.rows, Utc::now())?;
        info!("Fetched {} entries from remote source", entries.len());
        Ok(entries)
    }

    /// Posts a submission to the form endpoint. The answer body is ignored.
    #[instrument(skip(self, entry), fields(id = %entry.id))]
    pub async fn submit(&self, entry: &RsvpEntry) -> Result<(), RemoteError> {
        let form = self.form_body(entry);
        let response = self.http.post(&self.form_url).form(&form).send().await?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }
        info!("Submission accepted by form endpoint");
        Ok(())
    }

    /// Named fields of the form post, in submission order
    pub fn form_body(&self, entry: &RsvpEntry) -> Vec<(String, String)> {
        let mut form = vec![
            (self.fields.name.clone(), entry.name.clone()),
            (self.fields.email.clone(), entry.email.clone()),
            (FIELD_ATTENDING.to_string(), entry.attending.to_string()),
            (self.fields.guest_count.clone(), entry.guest_count.to_string()),
        ];

        if !entry.additional_guests.is_empty() {
            if let Ok(json) = serde_json::to_string(&entry.additional_guests) {
                form.push((FIELD_ADDITIONAL_GUESTS.to_string(), json));
            }
        }
        if let Some(dietary) = &entry.dietary_restrictions {
            form.push((FIELD_DIETARY.to_string(), dietary.clone()));
        }
        if let Some(song) = &entry.song_request {
            form.push((FIELD_SONG.to_string(), song.clone()));
        }
        if let Some(message) = &entry.message {
            form.push((self.fields.message.clone(), message.clone()));
        }

        form
    }
}

/// Maps a header row plus data rows onto entries.
///
/// Fewer than two rows means the sheet holds no responses yet.
pub fn entries_from_rows(
    rows: &[Vec<Value>],
    fetched_at: DateTime<Utc>,
) -> Result<Vec<RsvpEntry>, RemoteError> {
    let Some((header, data)) = rows.split_first() else {
        return Err(RemoteError::NoData);
    };
    if data.is_empty() {
        return Err(RemoteError::NoData);
    }

    let header: Vec<String> = header.iter().map(cell_text).collect();

    let entries = data
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let record: HashMap<&str, String> = header
                .iter()
                .enumerate()
                .map(|(i, column)| (column.as_str(), row.get(i).map(cell_text).unwrap_or_default()))
                .collect();
            entry_from_record(idx, &record, fetched_at)
        })
        .collect();

    Ok(entries)
}

fn entry_from_record(
    idx: usize,
    record: &HashMap<&str, String>,
    fetched_at: DateTime<Utc>,
) -> RsvpEntry {
    let email = cell(record, COL_EMAIL);
    let name = cell(record, COL_NAME);
    let key = if !email.is_empty() {
        email.to_string()
    } else if !name.is_empty() {
        name.to_string()
    } else {
        idx.to_string()
    };

    let attending = match cell(record, COL_ATTENDING) {
        "" => Attendance::Yes,
        value if value.to_lowercase() == "yes" => Attendance::Yes,
        _ => Attendance::No,
    };

    let additional_guests = match cell(record, COL_ADDITIONAL_GUESTS) {
        "" => Vec::new(),
        raw => serde_json::from_str::<Vec<AdditionalGuest>>(raw).unwrap_or_else(|e| {
            warn!("Failed to parse additional guests of row {}: {}", idx, e);
            Vec::new()
        }),
    };

    RsvpEntry {
        id: format!("api-{}-{}", idx, key),
        name: if name.is_empty() { "Guest".to_string() } else { name.to_string() },
        email: if email.is_empty() {
            format!("no-email-{}@example.com", idx)
        } else {
            email.to_string()
        },
        attending,
        guest_count: leading_integer(cell(record, COL_GUEST_COUNT)).unwrap_or(1).max(1),
        additional_guests,
        dietary_restrictions: non_empty(cell(record, COL_DIETARY)),
        song_request: non_empty(cell(record, COL_SONG)),
        message: non_empty(cell(record, COL_MESSAGE)),
        date: non_empty(cell(record, COL_TIMESTAMP)).unwrap_or_else(|| fetched_at.to_rfc3339()),
        source: EntrySource::Api,
    }
}

fn cell<'a>(record: &'a HashMap<&str, String>, column: &str) -> &'a str {
    record.get(column).map(String::as_str).unwrap_or("")
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Digits at the start of the text, `"3 people"` -> 3
fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
