//! Server configuration handed to the prober.

use serde::{Deserialize, Serialize};

/// Connection details for a single MCP server under test.
///
/// A config is either typed in directly (see [`ServerConfig::manual`]) or
/// produced by the installation code parser, in which case the raw text is
/// kept in `installation_code`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Base URL of the server. May be empty when nothing could be extracted.
    pub server_url: String,

    /// API key sent as a bearer token. `Some("")` is treated like `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Original installation code text, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_code: Option<String>,
}

impl ServerConfig {
    /// Build a config from a URL and key entered directly by the user.
    pub fn manual(server_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
            installation_code: None,
        }
    }

    /// The API key, if one is present and non-empty.
    pub fn bearer_token(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn manual_drops_empty_api_key() {
        let config = ServerConfig::manual("https://mcp.example.com", Some(String::new()));
        assert_eq!(config.api_key, None);
        assert_eq!(config.bearer_token(), None);

        let config = ServerConfig::manual("https://mcp.example.com", Some("sk-1".to_string()));
        assert_eq!(config.bearer_token(), Some("sk-1"));
    }

    #[test]
    fn bearer_token_ignores_empty_key() {
        let config = ServerConfig {
            server_url: "http://localhost:8080".into(),
            api_key: Some(String::new()),
            installation_code: Some("raw".into()),
        };
        assert!(config.bearer_token().is_none());
    }

    #[test]
    fn serializes_with_camel_case_and_skips_absent_fields() {
        let config = ServerConfig::manual("https://mcp.example.com", None);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, json!({ "serverUrl": "https://mcp.example.com" }));
    }
}
