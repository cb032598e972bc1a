//! Data models for probe configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection probe budget covering the health request and its root fallback.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

/// Per-request budget for each completion request.
pub const DEFAULT_FUNCTIONALITY_TIMEOUT_MS: u64 = 10_000;

/// Prompt sent to the completion endpoints.
pub const DEFAULT_TEST_PROMPT: &str = "Hello, this is a test message to verify MCP functionality.";

/// `max_tokens` sent with the test prompt.
pub const DEFAULT_MAX_TOKENS: u32 = 50;

/// Probe policy: timeouts, endpoint paths and the test payload.
///
/// Every field has a default, so a settings file may specify any subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProbeSettings {
    /// Budget for the connectivity probe, in milliseconds.
    pub connect_timeout_ms: u64,

    /// Budget for each completion request, in milliseconds.
    pub functionality_timeout_ms: u64,

    /// Path of the health endpoint, relative to the server URL.
    pub health_path: String,

    /// Retry against the bare server URL when the health path returns 404.
    pub root_fallback_on_not_found: bool,

    /// Completion endpoints, tried in order until one succeeds.
    pub completion_paths: Vec<String>,

    /// Prompt sent to the completion endpoints.
    pub test_prompt: String,

    /// `max_tokens` value sent with the prompt.
    pub max_tokens: u32,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            functionality_timeout_ms: DEFAULT_FUNCTIONALITY_TIMEOUT_MS,
            health_path: "/health".to_string(),
            root_fallback_on_not_found: true,
            completion_paths: vec!["/completions".to_string(), "/v1/completions".to_string()],
            test_prompt: DEFAULT_TEST_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ProbeSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn functionality_timeout(&self) -> Duration {
        Duration::from_millis(self.functionality_timeout_ms)
    }

    /// Apply explicit overrides on top of these settings.
    pub fn with_overrides(mut self, overrides: &ProbeOverrides) -> Self {
        if let Some(timeout) = overrides.connect_timeout_ms {
            self.connect_timeout_ms = timeout;
        }
        if let Some(timeout) = overrides.functionality_timeout_ms {
            self.functionality_timeout_ms = timeout;
        }
        self
    }
}

/// Values supplied explicitly by the caller, taking precedence over the
/// settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOverrides {
    pub connect_timeout_ms: Option<u64>,
    pub functionality_timeout_ms: Option<u64>,
}
