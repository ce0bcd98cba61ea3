//! RSVP services - Status, preview, submission, edit and delete

use crate::core::{AppError, AppState};
use crate::date_utils::{
    entry_timestamp, format_long_date, has_deadline_passed, local_now, remaining_time_text,
    time_until_deadline,
};
use crate::dtos::{
    EntryAction, EntryViewDTO, MutationResponseDTO, Notice, RsvpFormDTO, RsvpStatusDTO,
    RsvpSummaryDTO, SubmitResponseDTO, WsEventDTO,
};
use crate::entities::{EntrySource, RsvpEntry};
use crate::repositories::{Create, Delete, Read, Update};
use crate::sync::schedule_delayed_refresh;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

#[instrument(skip(state))]
pub async fn rsvp_status(State(state): State<Arc<AppState>>) -> Json<RsvpStatusDTO> {
    let now = local_now();
    let deadline = state.site.wedding_details.rsvp_deadline;
    let rsvp = &state.site.rsvp_config;

    Json(RsvpStatusDTO {
        deadline,
        deadline_display: format_long_date(deadline),
        deadline_passed: has_deadline_passed(deadline, now.date()),
        remaining_time: remaining_time_text(&time_until_deadline(deadline, now)),
        max_guest_count: rsvp.max_guest_count,
        sheet_url: rsvp.google_sheet_url.clone(),
    })
}

/// Confirmation summary of a form, nothing is stored or sent
#[instrument(skip(state, body))]
pub async fn preview_rsvp(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RsvpFormDTO>,
) -> Result<Json<RsvpSummaryDTO>, AppError> {
    let submission = body.into_submission(state.site.rsvp_config.max_guest_count)?;
    debug!(attending = %submission.attending, "RSVP preview built");
    Ok(Json(RsvpSummaryDTO::from(&submission)))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RsvpFormDTO>,
) -> Result<(StatusCode, Json<SubmitResponseDTO>), AppError> {
    // 1. Refuse once the deadline day is over
    // 2. Validate and normalise the form
    // 3. Post to the form endpoint in the background
    // 4. Store locally and prepend to the displayed list
    // 5. Broadcast and schedule a re-fetch
    if has_deadline_passed(
        state.site.wedding_details.rsvp_deadline,
        Local::now().date_naive(),
    ) {
        warn!("Submission received after the RSVP deadline");
        return Err(AppError::forbidden("The RSVP deadline has passed"));
    }

    let submission = body.into_submission(state.site.rsvp_config.max_guest_count)?;
    let entry = submission.into_entry(
        Uuid::new_v4().to_string(),
        entry_timestamp(&Local::now()),
        EntrySource::Local,
    );
    info!(id = %entry.id, attending = %entry.attending, "RSVP accepted");

    let remote_state = state.clone();
    let remote_entry = entry.clone();
    tokio::spawn(async move {
        if let Err(e) = remote_state.remote.submit(&remote_entry).await {
            error!("Error submitting form: {}", e);
        }
    });

    let notice = match state.cache.create(&entry).await {
        Ok(_) => Notice::info("RSVP Submitted", "Thank you for your response!"),
        Err(e) => {
            error!("Failed to save to local cache: {}", e);
            Notice::warning(
                "RSVP Submitted",
                "Thank you for your response! It could not be saved on this device.",
            )
        }
    };

    let view = EntryViewDTO::from(&entry);
    let entry_id = entry.id.clone();
    let total_guests = state.guest_list.prepend(entry).await;

    state.broadcast(WsEventDTO::RsvpUpdated {
        entry_id,
        action: EntryAction::Created,
    });
    schedule_delayed_refresh(state.clone());

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponseDTO {
            entry: view,
            total_guests,
            notice,
        }),
    ))
}

#[debug_handler]
#[instrument(skip(state, body))]
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<RsvpFormDTO>,
) -> Result<Json<MutationResponseDTO>, AppError> {
    let existing = find_entry(&state, &id)
        .await?
        .ok_or_else(|| AppError::not_found("RSVP entry not found"))?;

    let submission = body.into_submission(state.site.rsvp_config.max_guest_count)?;
    let updated = submission.into_entry(
        existing.id,
        entry_timestamp(&Local::now()),
        existing.source,
    );

    state.cache.update(id.as_str(), &updated).await.map_err(|e| {
        error!("Failed to save to local cache: {}", e);
        AppError::internal_server_error("Update failed").with_details(e.to_string())
    })?;
    let total_guests = match state.guest_list.update(&updated).await {
        Some(total) => total,
        None => state.guest_list.total_guests().await,
    };
    info!("RSVP entry updated");

    state.broadcast(WsEventDTO::RsvpUpdated {
        entry_id: id,
        action: EntryAction::Updated,
    });

    Ok(Json(MutationResponseDTO {
        entry: Some(EntryViewDTO::from(&updated)),
        total_guests,
        notice: Notice::info("RSVP Updated", "Your RSVP has been successfully updated."),
    }))
}

#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MutationResponseDTO>, AppError> {
    let removed_from_cache = state.cache.delete(id.as_str()).await.map_err(|e| {
        error!("Failed to save to local cache: {}", e);
        AppError::internal_server_error("Delete failed").with_details(e.to_string())
    })?;
    let removed_from_list = state.guest_list.remove(&id).await;

    let total_guests = match (removed_from_cache, removed_from_list) {
        (false, None) => return Err(AppError::not_found("RSVP entry not found")),
        (_, Some(total)) => total,
        (true, None) => state.guest_list.total_guests().await,
    };
    info!("RSVP entry deleted");

    state.broadcast(WsEventDTO::RsvpUpdated {
        entry_id: id,
        action: EntryAction::Deleted,
    });

    Ok(Json(MutationResponseDTO {
        entry: None,
        total_guests,
        notice: Notice::info("RSVP Deleted", "The RSVP has been successfully deleted."),
    }))
}

/// Looks the entry up in the displayed list first, then in the cache
async fn find_entry(state: &AppState, id: &str) -> Result<Option<RsvpEntry>, AppError> {
    if let Some(entry) = state.guest_list.find(id).await {
        return Ok(Some(entry));
    }
    Ok(state.cache.read(id).await?)
}
