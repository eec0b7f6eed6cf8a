//! Data models for the attendance admin console.
//!
//! These models match the backend wire contract exactly; the console holds no
//! authoritative state of its own and only caches the last response.

mod admin;
mod faculty;
mod hod;
mod request;

pub use admin::*;
pub use faculty::*;
pub use hod::*;
pub use request::*;

use serde::Deserialize;

/// Plain `{ "message": ... }` envelope used by most mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
