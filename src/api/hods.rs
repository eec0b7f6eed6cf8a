//! HOD management endpoints.

use super::{read_json, ApiClient};
use crate::errors::AppError;
use crate::models::{AddHodRequest, Hod, HodListResponse, MessageResponse, UpdateHodRequest, HOD_ROLE};

/// Form input for creating a HOD; the `masterAdmin` field is injected from
/// the token claims at call time.
#[derive(Debug, Clone)]
pub struct AddHodForm {
    pub name: String,
    pub username: String,
    pub password: String,
    pub branch: String,
}

/// Form input for updating a HOD. A blank password keeps the current one.
#[derive(Debug, Clone)]
pub struct UpdateHodForm {
    pub name: String,
    pub username: String,
    pub branch: String,
    pub password: Option<String>,
}

impl ApiClient {
    /// POST /api/masterAdmin/hod/add - Create a HOD under this master admin.
    pub async fn add_hod(
        &self,
        bearer: &str,
        master_admin_id: &str,
        form: AddHodForm,
    ) -> Result<MessageResponse, AppError> {
        let body = AddHodRequest {
            name: form.name,
            username: form.username,
            password: form.password,
            branch: form.branch,
            role: HOD_ROLE.to_string(),
            master_admin: master_admin_id.to_string(),
        };

        let resp = self
            .http()
            .post(self.url("/api/masterAdmin/hod/add"))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .json(&body)
            .send()
            .await?;
        read_json(resp).await
    }

    /// GET /api/masterAdmin/hod/getHod/:masterAdminId - List this admin's HODs.
    ///
    /// The backend answers 404 when the admin has no HODs yet; callers decide
    /// whether that is an error or an empty table.
    pub async fn list_hods(
        &self,
        bearer: &str,
        master_admin_id: &str,
    ) -> Result<Vec<Hod>, AppError> {
        let resp = self
            .http()
            .get(self.url(&format!("/api/masterAdmin/hod/getHod/{}", master_admin_id)))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .send()
            .await?;
        let envelope: HodListResponse = read_json(resp).await?;
        Ok(envelope.hods)
    }

    /// PUT /api/masterAdmin/hod/update/:id - Update a HOD record.
    pub async fn update_hod(
        &self,
        bearer: &str,
        id: &str,
        form: UpdateHodForm,
    ) -> Result<MessageResponse, AppError> {
        let body = UpdateHodRequest {
            name: form.name,
            username: form.username,
            branch: form.branch,
            password: form.password.filter(|p| !p.is_empty()),
        };

        let resp = self
            .http()
            .put(self.url(&format!("/api/masterAdmin/hod/update/{}", id)))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .json(&body)
            .send()
            .await?;
        read_json(resp).await
    }

    /// DELETE /api/masterAdmin/hod/remove/:id - Delete a HOD record.
    pub async fn remove_hod(&self, bearer: &str, id: &str) -> Result<MessageResponse, AppError> {
        let resp = self
            .http()
            .delete(self.url(&format!("/api/masterAdmin/hod/remove/{}", id)))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .send()
            .await?;
        read_json(resp).await
    }
}
