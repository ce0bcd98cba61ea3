//! Entities module - Domain entities of the wedding site
//!
//! `rsvp` holds the guest response record, `wedding` the read-only
//! configuration document every view consumes.

pub mod enums;
pub mod rsvp;
pub mod wedding;

// Re-exports
pub use enums::{Attendance, EntrySource, ListOrigin};
pub use rsvp::{AdditionalGuest, RsvpEntry, total_attending_guests};
pub use wedding::{
    Couple, FaqQuestion, FormFields, GalleryImage, LoveStoryEvent, NavigationLink,
    RegistryConfig, RsvpConfig, Venue, WeddingConfig, WeddingDetails, WeddingParty,
    WebsiteConfig,
};
