//! Client configuration.
//!
//! The two backend generations expose slightly different response envelopes
//! and pagination parameters. Both are an explicit configuration choice here,
//! never inferred from a response.

use serde::{Deserialize, Serialize};

/// Default backend base URL (overridable via config file or environment).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Business codes that invalidate the login state.
pub const SESSION_EXPIRED_CODES: [i64; 2] = [401, 1001];

/// Which business code the backend uses to signal success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnvelopeConvention {
    /// `code == 200` is success (web backend).
    #[default]
    SuccessIs200,
    /// `code == 0` is success (mini-program backend).
    SuccessIsZero,
}

impl EnvelopeConvention {
    /// Returns true if `code` is the success code under this convention.
    pub fn is_success(self, code: i64) -> bool {
        match self {
            Self::SuccessIs200 => code == 200,
            Self::SuccessIsZero => code == 0,
        }
    }
}

/// Which query parameters paginated list endpoints expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationStyle {
    /// `offset` / `limit` (web backend).
    #[default]
    OffsetLimit,
    /// `cursor` / `limit` (mini-program backend).
    CursorLimit,
}

/// Configuration for the request client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Response envelope convention of the configured backend.
    #[serde(default)]
    pub envelope: EnvelopeConvention,

    /// Pagination convention of the configured backend.
    #[serde(default)]
    pub pagination: PaginationStyle,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            envelope: EnvelopeConvention::default(),
            pagination: PaginationStyle::default(),
        }
    }
}

impl ClientConfig {
    /// Creates a config pointing at `base_url` with defaults elsewhere.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns true if `code` invalidates the session under any convention.
    pub fn is_session_expired(code: i64) -> bool {
        SESSION_EXPIRED_CODES.contains(&code)
    }
}
