//! DTOs module - Data Transfer Objects
//!
//! Request and response shapes of the HTTP and WebSocket surface, kept apart
//! from the entities they are built from.

pub mod guest_list;
pub mod rsvp;
pub mod site;
pub mod ws_event;

// Re-exports
pub use guest_list::{
    AttendanceFilter, EntryViewDTO, GuestListDTO, GuestListQuery, MutationResponseDTO, Notice,
    NoticeVariant, RefreshResponseDTO, ResponseCounts,
};
pub use rsvp::{
    AdditionalGuestDTO, GuestCountInput, RsvpFormDTO, RsvpSubmission, RsvpSummaryDTO,
    SubmitResponseDTO,
};
pub use site::{CountdownDTO, MetadataDTO, PublicWeddingDTO, RsvpStatusDTO};
pub use ws_event::{EntryAction, WsEventDTO};
