//! Validation for server configurations and probe settings.

use crate::config::ProbeSettings;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Validate a normalized server URL before any request is sent.
///
/// The URL must be non-empty, absolute, and use `http` or `https`.
pub fn validate_server_url(server_url: &str) -> Result<Url, ValidationError> {
    if server_url.trim().is_empty() {
        return Err(ValidationError::MissingServerUrl);
    }

    let url = Url::parse(server_url).map_err(|error| ValidationError::InvalidServerUrl {
        url: server_url.to_string(),
        reason: error.to_string(),
    })?;

    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ValidationError::UnsupportedScheme {
            scheme: scheme.to_string(),
        });
    }

    Ok(url)
}

/// Validate probe settings loaded from a file or assembled from overrides.
pub fn validate_settings(settings: &ProbeSettings) -> Result<(), ValidationError> {
    if settings.connect_timeout_ms == 0 {
        return Err(ValidationError::InvalidTimeout {
            field: "connectTimeoutMs".to_string(),
        });
    }

    if settings.functionality_timeout_ms == 0 {
        return Err(ValidationError::InvalidTimeout {
            field: "functionalityTimeoutMs".to_string(),
        });
    }

    validate_endpoint_path("healthPath", &settings.health_path)?;

    if settings.completion_paths.is_empty() {
        return Err(ValidationError::NoCompletionPaths);
    }
    for path in &settings.completion_paths {
        validate_endpoint_path("completionPaths", path)?;
    }

    if settings.max_tokens == 0 {
        return Err(ValidationError::InvalidMaxTokens);
    }

    debug!("Validated probe settings");
    Ok(())
}

fn validate_endpoint_path(field: &str, path: &str) -> Result<(), ValidationError> {
    if !path.starts_with('/') || path.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidPath {
            field: field.to_string(),
            path: path.to_string(),
        });
    }
    Ok(())
}

/// Errors that can occur during validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Server URL is required")]
    MissingServerUrl,

    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Unsupported URL scheme: {scheme} (expected http/https)")]
    UnsupportedScheme { scheme: String },

    #[error("Invalid timeout '{field}': must be greater than zero")]
    InvalidTimeout { field: String },

    #[error("Invalid endpoint path in '{field}': '{path}' must start with '/' and contain no whitespace")]
    InvalidPath { field: String, path: String },

    #[error("At least one completion path is required")]
    NoCompletionPaths,

    #[error("maxTokens must be greater than zero")]
    InvalidMaxTokens,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_server_url_valid() {
        assert!(validate_server_url("https://mcp.example.com").is_ok());
        assert!(validate_server_url("http://localhost:8080/api").is_ok());
        assert!(validate_server_url("http://127.0.0.1:3000").is_ok());
    }

    #[test]
    fn test_validate_server_url_missing() {
        assert!(matches!(validate_server_url(""), Err(ValidationError::MissingServerUrl)));
        assert!(matches!(validate_server_url("   "), Err(ValidationError::MissingServerUrl)));
    }

    #[test]
    fn test_validate_server_url_rejects_relative() {
        assert!(matches!(
            validate_server_url("mcp.example.com"),
            Err(ValidationError::InvalidServerUrl { .. })
        ));
    }

    #[test]
    fn test_validate_server_url_rejects_non_http() {
        assert!(matches!(
            validate_server_url("ws://example.com"),
            Err(ValidationError::UnsupportedScheme { .. })
        ));
        // `host:port` parses with the host as the scheme.
        assert!(matches!(
            validate_server_url("localhost:8080"),
            Err(ValidationError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_validate_default_settings() {
        assert!(validate_settings(&ProbeSettings::default()).is_ok());
    }

    #[test]
    fn test_validate_settings_rejects_zero_timeout() {
        let settings = ProbeSettings {
            connect_timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(validate_settings(&settings), Err(ValidationError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_validate_settings_rejects_bad_paths() {
        let settings = ProbeSettings {
            completion_paths: vec!["completions".to_string()],
            ..Default::default()
        };
        assert!(matches!(validate_settings(&settings), Err(ValidationError::InvalidPath { .. })));

        let settings = ProbeSettings {
            completion_paths: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(validate_settings(&settings), Err(ValidationError::NoCompletionPaths)));
    }

    #[test]
    fn test_validate_settings_rejects_zero_max_tokens() {
        let settings = ProbeSettings {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(matches!(validate_settings(&settings), Err(ValidationError::InvalidMaxTokens)));
    }
}
