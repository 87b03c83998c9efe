//! Configuration loader
//!
//! Loads the publishing configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Every loaded configuration is validated before it is returned.
//!
//! ## Environment Variables
//! - `GHOSTPRESS_URL`: Site URL of the Ghost instance
//! - `GHOSTPRESS_ADMIN_API_KEY`: Admin API key (`<id>:<secret>`)
//! - `GHOSTPRESS_DEBUG`: Log payloads and responses (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./ghostpress.toml` or `./ghostpress.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent directory
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use ghostpress_domain::{GhostPressError, PublishConfig, Result};
use url::Url;

/// Site URL
pub const ENV_URL: &str = "GHOSTPRESS_URL";
/// Admin API key (`<id>:<hex secret>`)
pub const ENV_ADMIN_API_KEY: &str = "GHOSTPRESS_ADMIN_API_KEY";
/// Turns on the diagnostics log
pub const ENV_DEBUG: &str = "GHOSTPRESS_DEBUG";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["ghostpress.toml", "ghostpress.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `GhostPressError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The URL or credential is invalid
pub fn load() -> Result<PublishConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `GhostPressError::Config` if `GHOSTPRESS_URL` or
/// `GHOSTPRESS_ADMIN_API_KEY` is missing or invalid.
pub fn load_from_env() -> Result<PublishConfig> {
    let url = env_var(ENV_URL)?;
    let key = env_var(ENV_ADMIN_API_KEY)?;
    let config = PublishConfig::new(url, key).with_debug_log(env_bool(ENV_DEBUG, false));

    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `GhostPressError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<PublishConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GhostPressError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GhostPressError::Config(format!(
                "No config file found; set {ENV_URL} and {ENV_ADMIN_API_KEY} or create ghostpress.toml"
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GhostPressError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Check that the URL is an absolute http(s) URL and the credential is set.
///
/// The credential's inner format is left to the token signer so that a bad
/// key is reported per document.
///
/// # Errors
/// Returns `GhostPressError::Config` describing the first problem found.
pub fn validate(config: &PublishConfig) -> Result<()> {
    let url = Url::parse(config.endpoint_url.trim())
        .map_err(|e| GhostPressError::Config(format!("Invalid Ghost URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(GhostPressError::Config(format!(
            "Ghost URL must use http or https, got {}",
            url.scheme()
        )));
    }

    if config.credential.is_empty() {
        return Err(GhostPressError::Config("Admin API key is empty".to_string()));
    }

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `GhostPressError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<PublishConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GhostPressError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GhostPressError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(GhostPressError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.extend(candidates_in(&cwd.join("..")));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name))
}

/// Get required environment variable
///
/// # Errors
/// Returns `GhostPressError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty()).ok_or_else(|| {
        GhostPressError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use ghostpress_domain::ExposeSecret;
    use once_cell::sync::Lazy;
    use tempfile::TempDir;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        std::env::remove_var(ENV_URL);
        std::env::remove_var(ENV_ADMIN_API_KEY);
        std::env::remove_var(ENV_DEBUG);
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for value in ["1", "true", "yes", "on", "TRUE"] {
            std::env::set_var("GHOSTPRESS_TEST_BOOL", value);
            assert!(env_bool("GHOSTPRESS_TEST_BOOL", false), "{value}");
        }
        for value in ["0", "false", "no", "off"] {
            std::env::set_var("GHOSTPRESS_TEST_BOOL", value);
            assert!(!env_bool("GHOSTPRESS_TEST_BOOL", true), "{value}");
        }

        std::env::remove_var("GHOSTPRESS_TEST_BOOL");
        assert!(env_bool("GHOSTPRESS_TEST_BOOL", true));
        assert!(!env_bool("GHOSTPRESS_TEST_BOOL", false));
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_URL, "https://blog.example.com");
        std::env::set_var(ENV_ADMIN_API_KEY, "abc:00ff");
        std::env::set_var(ENV_DEBUG, "true");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.endpoint_url, "https://blog.example.com");
        assert_eq!(config.credential.expose_secret(), "abc:00ff");
        assert!(config.debug_log);
    }

    #[test]
    fn test_load_from_env_missing_key() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        clear_env();
        std::env::set_var(ENV_URL, "https://blog.example.com");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(GhostPressError::Config(msg)) if msg.contains(ENV_ADMIN_API_KEY)));
    }

    #[test]
    fn test_load_from_env_rejects_non_http_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(ENV_URL, "ftp://blog.example.com");
        std::env::set_var(ENV_ADMIN_API_KEY, "abc:00ff");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(GhostPressError::Config(_))));
    }

    #[test]
    fn test_load_from_file_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghostpress.toml");
        std::fs::write(
            &path,
            "endpoint_url = \"https://blog.example.com\"\ncredential = \"abc:00ff\"\ndebug_log = true\n",
        )
        .unwrap();

        let config = load_from_file(Some(path)).unwrap();
        assert_eq!(config.endpoint_url, "https://blog.example.com");
        assert!(config.debug_log);
    }

    #[test]
    fn test_load_from_file_json_defaults_debug_off() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"url": "http://localhost:2368", "admin_api_key": "a:0f"}"#)
            .unwrap();

        let config = load_from_file(Some(path)).unwrap();
        assert_eq!(config.endpoint_url, "http://localhost:2368");
        assert!(!config.debug_log);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/ghostpress.toml")));
        assert!(matches!(result, Err(GhostPressError::Config(_))));
    }

    #[test]
    fn test_load_from_file_missing_credential() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghostpress.json");
        std::fs::write(&path, r#"{"endpoint_url": "https://blog.example.com"}"#).unwrap();

        let result = load_from_file(Some(path));
        assert!(matches!(result, Err(GhostPressError::Config(msg)) if msg.contains("Invalid JSON")));
    }

    #[test]
    fn test_validate_rejects_empty_credential() {
        let config = PublishConfig::new("https://blog.example.com", "  ");
        assert!(matches!(validate(&config), Err(GhostPressError::Config(_))));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("url: x", Path::new("ghostpress.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
