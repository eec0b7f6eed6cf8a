//! Faculty models.

use serde::{Deserialize, Serialize};

/// A faculty record as returned by the backend.
///
/// Unlike HOD records, faculty records come back with a plain `id` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: String,
    pub name: String,
    pub faculty_username: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub subject: String,
}

/// Envelope for GET /api/masterAdmin/faculty/getFaculty/{masterAdminId}.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyListResponse {
    #[serde(default)]
    pub faculty_members: Vec<Faculty>,
}

/// Request body for POST /api/masterAdmin/faculty/add.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFacultyRequest {
    pub name: String,
    pub faculty_username: String,
    pub password: String,
    pub branch: String,
    pub subject: String,
}

/// Request body for PUT /api/masterAdmin/faculty/update/{id}.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacultyRequest {
    pub name: String,
    pub faculty_username: String,
    pub branch: String,
    pub subject: String,
}
