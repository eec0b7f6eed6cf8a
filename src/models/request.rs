//! Pending-change request models.
//!
//! Two request families reach the master admin: new-faculty requests and
//! faculty update/removal requests. Status transitions are enforced by the
//! backend; the console only reflects the last response.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

/// Decision the master admin can take on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    Approve,
    Reject,
}

/// What an update-family request asks to do to a faculty record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateAction {
    Update,
    Remove,
}

impl UpdateAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateAction::Update => "update",
            UpdateAction::Remove => "remove",
        }
    }
}

/// A pending new-faculty request.
///
/// The candidate's name travels inside `data`, not as a top-level field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub faculty_username: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub subject: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl FacultyRequest {
    /// Candidate name carried in the request payload, if any.
    pub fn candidate_name(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d["name"].as_str())
    }
}

/// Envelope for GET /api/masterAdmin/getRequests.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<FacultyRequest>,
}

/// A pending faculty update or removal request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(rename = "RequestId")]
    pub request_id: String,
    pub faculty_username: String,
    pub action: UpdateAction,
    pub status: RequestStatus,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl UpdateRequest {
    /// Removal reason carried in the request payload, if any.
    pub fn removal_reason(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d["reason"].as_str())
    }
}

/// Envelope for GET /api/masterAdmin/getupdateRequests.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequestListResponse {
    #[serde(default)]
    pub data: Vec<UpdateRequest>,
}

/// Request body for the approve/reject endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDecision {
    pub request_id: String,
    pub action: DecisionAction,
}

/// Envelope returned by the decision endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::from_str::<RequestStatus>("\"pending\"").unwrap(),
            RequestStatus::Pending
        );
        assert_eq!(RequestStatus::Rejected.as_str(), "rejected");
    }

    #[test]
    fn test_decision_body_wire_shape() {
        let body = serde_json::to_value(RequestDecision {
            request_id: "r1".to_string(),
            action: DecisionAction::Approve,
        })
        .unwrap();
        assert_eq!(body["requestId"], "r1");
        assert_eq!(body["action"], "approve");
    }

    #[test]
    fn test_faculty_request_name_in_data() {
        let json = r#"{"_id":"r1","facultyUsername":"alan@uni.edu","branch":"CSE","subject":"Theory","status":"pending","createdAt":"2025-01-01T00:00:00Z","data":{"name":"Alan"}}"#;
        let req: FacultyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.candidate_name(), Some("Alan"));
        assert_eq!(req.status, RequestStatus::Pending);
    }

    #[test]
    fn test_update_request_pascal_case_id() {
        let json = r#"{"RequestId":"u1","facultyUsername":"alan@uni.edu","action":"remove","status":"pending","data":{"reason":"left the department"}}"#;
        let req: UpdateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.request_id, "u1");
        assert_eq!(req.action, UpdateAction::Remove);
        assert_eq!(req.removal_reason(), Some("left the department"));
    }

    #[test]
    fn test_list_envelopes_tolerate_missing_data() {
        let resp: RequestListResponse = serde_json::from_str("{\"success\":true}").unwrap();
        assert!(resp.data.is_empty());
        let resp: UpdateRequestListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_empty());
    }
}
