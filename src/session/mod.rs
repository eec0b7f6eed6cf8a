//! Session persistence.
//!
//! Stands in for the browser's sessionStorage: the bearer token and an
//! absolute expiry live in a small JSON file. Sessions expire four hours
//! after login; an expired file is deleted the next time it is read.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// How long a login stays valid.
const SESSION_TTL_HOURS: i64 = 4;

/// An authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// File-backed store for the current session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Persist a freshly issued token with a new expiry.
    pub fn save(&self, token: &str) -> Result<Session, AppError> {
        let session = Session {
            token: token.to_string(),
            expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&session)?)?;
        tracing::debug!("Session saved to {:?}", self.path);
        Ok(session)
    }

    /// Load the current session, evicting it if it has expired.
    pub fn load(&self) -> Result<Option<Session>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let session: Session = serde_json::from_str(&raw)
            .map_err(|e| AppError::Session(format!("Corrupt session file: {}", e)))?;

        if session.is_expired() {
            tracing::info!("Session expired, clearing");
            self.clear()?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Drop the stored session, if any.
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::codes;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("nested").join("session.json"))
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save("tok-123").unwrap();
        let session = store.load().unwrap().expect("session should exist");
        assert_eq!(session.token, "tok-123");
        assert!(!session.is_expired());
        assert_eq!(session.bearer(), "Bearer tok-123");
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn test_expired_session_evicted_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let stale = Session {
            token: "tok-old".to_string(),
            expires_at: Utc::now() - Duration::minutes(1),
        };
        fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let store = SessionStore::new(&path);
        assert!(store.load().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_session_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{{{{").unwrap();

        let err = SessionStore::new(&path).load().unwrap_err();
        assert_eq!(err.error_code(), codes::SESSION_ERROR);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save("tok").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
