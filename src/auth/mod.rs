//! Bearer-token handling.
//!
//! The backend issues a JWT whose payload carries the master admin id under
//! the `masterAdmin` claim; that id is a path parameter on the HOD and
//! faculty listing endpoints. The console decodes the payload only — no
//! signature verification happens client-side, identity enforcement is the
//! backend's job.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::errors::AppError;

/// Claims the console cares about from the token payload. Everything else
/// in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default, rename = "masterAdmin")]
    pub master_admin: Option<String>,
}

/// Decode the payload segment of a JWT without verifying its signature.
pub fn decode_payload(token: &str) -> Result<TokenClaims, AppError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(AppError::Token("Malformed token".to_string())),
    };

    // Tolerate padded input; the engine itself expects none.
    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::Token(format!("Failed to decode token payload: {}", e)))?;

    serde_json::from_slice(&raw)
        .map_err(|e| AppError::Token(format!("Failed to parse token payload: {}", e)))
}

/// Extract the master admin id a token was issued for.
pub fn master_admin_id(token: &str) -> Result<String, AppError> {
    let claims = decode_payload(token)?;
    claims
        .master_admin
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Token("Invalid token: masterAdminId missing".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::codes;

    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_decode_extracts_master_admin() {
        let token = make_token(r#"{"masterAdmin":"ma-1","role":"masterAdmin","exp":1767225600}"#);
        let claims = decode_payload(&token).unwrap();
        assert_eq!(claims.master_admin.as_deref(), Some("ma-1"));
        assert_eq!(master_admin_id(&token).unwrap(), "ma-1");
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        // "ab" encodes to three base64 chars plus one pad char
        let body = format!("{}=", URL_SAFE_NO_PAD.encode(br#"{"masterAdmin":"ab"}"#));
        let token = format!("{}.{}.sig", header, body);
        assert_eq!(master_admin_id(&token).unwrap(), "ab");
    }

    #[test]
    fn test_missing_claim_is_token_error() {
        let token = make_token(r#"{"role":"masterAdmin"}"#);
        let err = master_admin_id(&token).unwrap_err();
        assert_eq!(err.error_code(), codes::TOKEN_ERROR);
    }

    #[test]
    fn test_garbage_token_is_token_error() {
        for bad in ["", "not-a-jwt", "only.!!badbase64!!", "a."] {
            let err = decode_payload(bad).unwrap_err();
            assert_eq!(err.error_code(), codes::TOKEN_ERROR, "input: {:?}", bad);
        }
    }

    #[test]
    fn test_non_json_payload_is_token_error() {
        let header = URL_SAFE_NO_PAD.encode(b"{}");
        let body = URL_SAFE_NO_PAD.encode(b"plain text");
        let token = format!("{}.{}.sig", header, body);
        let err = decode_payload(&token).unwrap_err();
        assert_eq!(err.error_code(), codes::TOKEN_ERROR);
    }
}
