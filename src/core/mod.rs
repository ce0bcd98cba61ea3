//! Core Module - Infrastructure of the application
//!
//! - Configuration
//! - Error handling
//! - Displayed guest list
//! - Application state

pub mod config;
pub mod error;
pub mod guest_list;
pub mod state;

// Re-exports
pub use config::Config;
pub use error::{AppError, FieldErrors, collect_field_errors};
pub use guest_list::{GuestList, GuestListSnapshot};
pub use state::AppState;
