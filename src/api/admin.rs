//! Master admin account endpoints.

use super::{read_json, ApiClient};
use crate::errors::AppError;
use crate::models::{
    AdminProfile, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    ProfileResponse, RegisterRequest,
};

impl ApiClient {
    /// POST /api/masterAdmin/login - Authenticate and obtain a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let resp = self
            .http()
            .post(self.url("/api/masterAdmin/login"))
            .json(&LoginRequest::new(username, password))
            .send()
            .await?;
        read_json(resp).await
    }

    /// POST /api/masterAdmin/register - Create a master admin account.
    ///
    /// Registration does not log in; the caller still has to authenticate.
    pub async fn register(
        &self,
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<MessageResponse, AppError> {
        let resp = self
            .http()
            .post(self.url("/api/masterAdmin/register"))
            .json(&RegisterRequest::new(name, username, password))
            .send()
            .await?;
        read_json(resp).await
    }

    /// PUT /api/masterAdmin/forgetPassword - Reset a password by username.
    pub async fn forgot_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> Result<MessageResponse, AppError> {
        let resp = self
            .http()
            .put(self.url("/api/masterAdmin/forgetPassword"))
            .json(&ForgotPasswordRequest {
                username: username.to_string(),
                new_password: new_password.to_string(),
            })
            .send()
            .await?;
        read_json(resp).await
    }

    /// GET /api/masteradmin/profile - Fetch the authenticated admin's profile.
    pub async fn profile(&self, bearer: &str) -> Result<AdminProfile, AppError> {
        let resp = self
            .http()
            .get(self.url("/api/masteradmin/profile"))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .send()
            .await?;
        let envelope: ProfileResponse = read_json(resp).await?;
        Ok(envelope.profile)
    }
}
