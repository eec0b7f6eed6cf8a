//! Head-of-Department models.

use serde::{Deserialize, Serialize};

/// Role string the backend assigns to HOD accounts.
pub const HOD_ROLE: &str = "hod";

/// A Head of Department record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hod {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    pub branch: String,
    #[serde(default)]
    pub role: String,
}

/// Envelope for GET /api/masterAdmin/hod/getHod/{masterAdminId}.
#[derive(Debug, Clone, Deserialize)]
pub struct HodListResponse {
    #[serde(default)]
    pub hods: Vec<Hod>,
}

/// Request body for POST /api/masterAdmin/hod/add.
///
/// `master_admin` is filled in from the decoded token claims, mirroring the
/// path the rest of the console derives from the same claim.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHodRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub branch: String,
    pub role: String,
    pub master_admin: String,
}

/// Request body for PUT /api/masterAdmin/hod/update/{id}.
///
/// A blank password means "keep the current one" and is omitted from the body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHodRequest {
    pub name: String,
    pub username: String,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hod_wire_id_field() {
        let json = r#"{"_id":"h1","name":"Grace","username":"grace","branch":"CSE","role":"hod"}"#;
        let hod: Hod = serde_json::from_str(json).unwrap();
        assert_eq!(hod.id, "h1");
        assert_eq!(hod.role, HOD_ROLE);
    }

    #[test]
    fn test_hod_list_tolerates_missing_array() {
        let resp: HodListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.hods.is_empty());
    }

    #[test]
    fn test_update_omits_blank_password() {
        let body = serde_json::to_value(UpdateHodRequest {
            name: "Grace".to_string(),
            username: "grace".to_string(),
            branch: "CSE".to_string(),
            password: None,
        })
        .unwrap();
        assert!(body.get("password").is_none());
    }

    #[test]
    fn test_add_request_camel_case_master_admin() {
        let body = serde_json::to_value(AddHodRequest {
            name: "Grace".to_string(),
            username: "grace".to_string(),
            password: "pw".to_string(),
            branch: "CSE".to_string(),
            role: HOD_ROLE.to_string(),
            master_admin: "ma-1".to_string(),
        })
        .unwrap();
        assert_eq!(body["masterAdmin"], "ma-1");
    }
}
