//! Pending-request endpoints.
//!
//! New-faculty requests and faculty update/removal requests are separate
//! backend collections with separate decision endpoints.

use super::{read_json, ApiClient};
use crate::errors::AppError;
use crate::models::{
    DecisionAction, DecisionResponse, FacultyRequest, RequestDecision, RequestListResponse,
    UpdateRequest, UpdateRequestListResponse,
};

impl ApiClient {
    /// GET /api/masterAdmin/getRequests - List new-faculty requests.
    pub async fn list_requests(&self, bearer: &str) -> Result<Vec<FacultyRequest>, AppError> {
        let resp = self
            .http()
            .get(self.url("/api/masterAdmin/getRequests"))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .send()
            .await?;
        let envelope: RequestListResponse = read_json(resp).await?;
        if !envelope.success {
            return Err(AppError::Internal("Failed to fetch requests".to_string()));
        }
        Ok(envelope.data)
    }

    /// POST /api/masterAdmin/approveRejectRequest - Decide a new-faculty request.
    pub async fn decide_request(
        &self,
        bearer: &str,
        request_id: &str,
        action: DecisionAction,
    ) -> Result<DecisionResponse, AppError> {
        let resp = self
            .http()
            .post(self.url("/api/masterAdmin/approveRejectRequest"))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .json(&RequestDecision {
                request_id: request_id.to_string(),
                action,
            })
            .send()
            .await?;
        read_json(resp).await
    }

    /// GET /api/masterAdmin/getupdateRequests - List update/removal requests.
    pub async fn list_update_requests(&self, bearer: &str) -> Result<Vec<UpdateRequest>, AppError> {
        let resp = self
            .http()
            .get(self.url("/api/masterAdmin/getupdateRequests"))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .send()
            .await?;
        let envelope: UpdateRequestListResponse = read_json(resp).await?;
        Ok(envelope.data)
    }

    /// POST /api/masterAdmin/updateRequest - Decide a faculty update request.
    pub async fn decide_update_request(
        &self,
        bearer: &str,
        request_id: &str,
        action: DecisionAction,
    ) -> Result<DecisionResponse, AppError> {
        self.decide_on(bearer, "/api/masterAdmin/updateRequest", request_id, action)
            .await
    }

    /// POST /api/masterAdmin/removeRequest - Decide a faculty removal request.
    pub async fn decide_remove_request(
        &self,
        bearer: &str,
        request_id: &str,
        action: DecisionAction,
    ) -> Result<DecisionResponse, AppError> {
        self.decide_on(bearer, "/api/masterAdmin/removeRequest", request_id, action)
            .await
    }

    async fn decide_on(
        &self,
        bearer: &str,
        path: &str,
        request_id: &str,
        action: DecisionAction,
    ) -> Result<DecisionResponse, AppError> {
        let resp = self
            .http()
            .post(self.url(path))
            .header(reqwest::header::AUTHORIZATION, bearer)
            .json(&RequestDecision {
                request_id: request_id.to_string(),
                action,
            })
            .send()
            .await?;
        read_json(resp).await
    }
}
