//! Faculty management endpoints.

use super::{read_json, ApiClient};
use crate::errors::AppError;
use crate::models::{
    AddFacultyRequest, Faculty, FacultyListResponse, MessageResponse, UpdateFacultyRequest,
};

/// Form input for creating a faculty record.
#[derive(Debug, Clone)]
pub struct AddFacultyForm {
    pub name: String,
    pub faculty_username: String,
    pub password: String,
    pub branch: String,
    pub subject: String,
}

/// Form input for updating a faculty record.
#[derive(Debug, Clone)]
pub struct UpdateFacultyForm {
    pub name: String,
    pub faculty_username: String,
    pub branch: String,
    pub subject: String,
}

impl ApiClient {
    /// POST /api/masterAdmin/faculty/add - Create a faculty record.
    pub async fn add_faculty(
        &self,
        bearer: &str,
        form: AddFacultyForm,
    ) -> Result<MessageResponse, AppError> {
        let body = AddFacultyRequest {
            name: form.name,
            faculty_username: form.faculty_username,
            password: form.password,
            branch: form.branch,
            subject: form.subject,
        };

        let resp = self
            .http()
            .post(self.url("/api/masterAdmin/faculty/add"))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .json(&body)
            .send()
            .await?;
        read_json(resp).await
    }

    /// GET /api/masterAdmin/faculty/getFaculty/:masterAdminId - List faculty.
    pub async fn list_faculty(
        &self,
        bearer: &str,
        master_admin_id: &str,
    ) -> Result<Vec<Faculty>, AppError> {
        let resp = self
            .http()
            .get(self.url(&format!(
                "/api/masterAdmin/faculty/getFaculty/{}",
                master_admin_id
            )))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .send()
            .await?;
        let envelope: FacultyListResponse = read_json(resp).await?;
        Ok(envelope.faculty_members)
    }

    /// PUT /api/masterAdmin/faculty/update/:id - Update a faculty record.
    pub async fn update_faculty(
        &self,
        bearer: &str,
        id: &str,
        form: UpdateFacultyForm,
    ) -> Result<MessageResponse, AppError> {
        let body = UpdateFacultyRequest {
            name: form.name,
            faculty_username: form.faculty_username,
            branch: form.branch,
            subject: form.subject,
        };

        let resp = self
            .http()
            .put(self.url(&format!("/api/masterAdmin/faculty/update/{}", id)))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .json(&body)
            .send()
            .await?;
        read_json(resp).await
    }

    /// DELETE /api/masterAdmin/faculty/remove/:id - Delete a faculty record.
    pub async fn remove_faculty(
        &self,
        bearer: &str,
        id: &str,
    ) -> Result<MessageResponse, AppError> {
        let resp = self
            .http()
            .delete(self.url(&format!("/api/masterAdmin/faculty/remove/{}", id)))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .send()
            .await?;
        read_json(resp).await
    }
}
