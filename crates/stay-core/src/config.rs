//! Backend API Configuration

use std::time::Duration;

use url::Url;

use crate::error::{FlowError, Result};

/// Deployed host for login and profile endpoints
pub const DEFAULT_AUTH_URL: &str = "https://hos-find-be.onrender.com";

/// Deployed host for owner applications
pub const DEFAULT_API_BASE_URL: &str = "https://swift-stay-be.onrender.com";

/// Per-request timeout when none is configured
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const AUTH_URL_VAR: &str = "SWIFT_STAY_AUTH_URL";
pub const API_BASE_URL_VAR: &str = "SWIFT_STAY_API_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "SWIFT_STAY_REQUEST_TIMEOUT_SECS";

/// Where the backend lives and how long to wait for it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the auth/user API (no trailing slash)
    pub auth_base_url: String,

    /// Base URL of the owner applications API (no trailing slash)
    pub applications_base_url: String,

    /// Timeout applied to every outbound request
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_URL.into(),
            applications_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let auth_base_url = match get(AUTH_URL_VAR) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_AUTH_URL.into(),
        };

        let applications_base_url = match get(API_BASE_URL_VAR) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.into(),
        };

        let request_timeout = match get(REQUEST_TIMEOUT_VAR) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            auth_base_url,
            applications_base_url,
            request_timeout,
        })
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.auth_base_url)
    }

    pub fn profile_url(&self) -> String {
        format!("{}/api/users/profile", self.auth_base_url)
    }

    pub fn owner_application_url(&self) -> String {
        format!("{}/api/owner-applications/submit", self.applications_base_url)
    }
}

/// Validate a base URL and strip trailing slashes
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FlowError::Config(format!(
            "unsupported scheme '{}' in {trimmed}",
            parsed.scheme()
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| FlowError::Config(format!("{REQUEST_TIMEOUT_VAR} must be whole seconds, got '{raw}'")))?;

    if secs == 0 {
        return Err(FlowError::Config(format!("{REQUEST_TIMEOUT_VAR} must be positive")));
    }

    Ok(Duration::from_secs(secs))
}
