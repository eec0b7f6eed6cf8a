//! Master admin account models.

use serde::{Deserialize, Serialize};

/// Role string the backend expects for master admin accounts.
pub const MASTER_ADMIN_ROLE: &str = "masterAdmin";

/// Profile of the authenticated master admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub username: String,
    pub role: String,
}

/// Envelope for GET /api/masteradmin/profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub profile: AdminProfile,
}

/// Request body for POST /api/masterAdmin/login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: MASTER_ADMIN_ROLE.to_string(),
        }
    }
}

/// Envelope for a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
}

/// Request body for POST /api/masterAdmin/register.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

impl RegisterRequest {
    pub fn new(name: &str, username: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role: MASTER_ADMIN_ROLE.to_string(),
        }
    }
}

/// Request body for PUT /api/masterAdmin/forgetPassword.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub username: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_carries_master_admin_role() {
        let body = serde_json::to_value(LoginRequest::new("admin", "secret")).unwrap();
        assert_eq!(body["role"], "masterAdmin");
        assert_eq!(body["username"], "admin");
    }

    #[test]
    fn test_forgot_password_wire_field() {
        let body = serde_json::to_value(ForgotPasswordRequest {
            username: "admin".to_string(),
            new_password: "pw".to_string(),
        })
        .unwrap();
        assert_eq!(body["newPassword"], "pw");
    }

    #[test]
    fn test_profile_envelope_deserializes() {
        let json = r#"{"profile":{"id":"66f","name":"Ada","username":"ada","role":"masterAdmin"}}"#;
        let resp: ProfileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.profile.name, "Ada");
        assert_eq!(resp.profile.role, MASTER_ADMIN_ROLE);
    }
}
