//! Data models for StudyDesk API payloads.
//!
//! Response shapes are declared per endpoint where the backend's contract
//! is known; every field is optional because the backend freely omits
//! fields, and callers should treat missing data as absent rather than
//! fail the whole response.

pub mod auth;
pub mod summary;
pub mod user;

pub use auth::AuthResponse;
pub use summary::{SummariesResponse, Summary};
pub use user::UserProfile;
