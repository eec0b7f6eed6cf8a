//! Configuration module for the admin console.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend the hosted console talks to.
const DEFAULT_API_URL: &str = "https://attendancetracker-backend1.onrender.com";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the attendance tracker backend
    pub api_base_url: String,
    /// Path to the session file holding the bearer token
    pub session_path: PathBuf,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("ATTENDANCE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let session_path = env::var("ATTENDANCE_SESSION_PATH")
            .unwrap_or_else(|_| "./data/session.json".to_string())
            .into();

        // A malformed timeout falls back to the default rather than aborting.
        let http_timeout = env::var("ATTENDANCE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        let log_level = env::var("ATTENDANCE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_base_url,
            session_path,
            http_timeout,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the cases share process-wide env vars and must not run
    // on parallel test threads.
    #[test]
    fn test_config_from_env() {
        env::remove_var("ATTENDANCE_API_URL");
        env::remove_var("ATTENDANCE_SESSION_PATH");
        env::remove_var("ATTENDANCE_HTTP_TIMEOUT_SECS");
        env::remove_var("ATTENDANCE_LOG_LEVEL");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.session_path, PathBuf::from("./data/session.json"));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, "info");

        env::set_var("ATTENDANCE_API_URL", "http://localhost:5000/");
        let config = Config::from_env();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        env::remove_var("ATTENDANCE_API_URL");

        env::set_var("ATTENDANCE_HTTP_TIMEOUT_SECS", "soon");
        let config = Config::from_env();
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        env::remove_var("ATTENDANCE_HTTP_TIMEOUT_SECS");
    }
}
