//! Application constants
//!
//! Centralized location for the Ghost Admin API contract and the user-facing
//! strings shared by every entry point.

// Admin API contract
pub const ADMIN_API_VERSION: &str = "v4";
pub const ADMIN_API_PATH_PREFIX: &str = "/ghost/api";
pub const POSTS_RESOURCE: &str = "admin/posts/?source=html";
pub const AUTH_SCHEME: &str = "Ghost";
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

// Token lifetime (seconds)
pub const TOKEN_TTL_SECS: i64 = 5 * 60;

// Credential layout: "<key id>:<hex secret>"
pub const CREDENTIAL_SEPARATOR: char = ':';

// Error composition
pub const CONNECT_FAILURE_PREFIX: &str =
    "Couldn't connect to the Ghost API. Is the API URL and Admin API Key correct?";
pub const UNKNOWN_REMOTE_ERROR: &str = "Unknown error";
pub const ERROR_DETAIL_SEPARATOR: &str = " - ";
pub const PUBLISH_FALLBACK_ERROR: &str = "An error occurred while publishing";
pub const UNREADABLE_NOTE_PREFIX: &str = "Error: couldn't read note:";

/// Tracing target for payload/response dumps enabled by `debug_log`.
pub const DIAGNOSTICS_TARGET: &str = "ghostpress::diagnostics";

/// Audience claim expected by the Admin API, e.g. `/v4/admin/`.
pub fn admin_audience() -> String {
    format!("/{ADMIN_API_VERSION}/admin/")
}
