//! Installation code parsing.
//!
//! Installation codes are whatever a marketplace listing tells users to copy:
//! a bare URL, a JSON snippet, a shell-ish `API_KEY=... SERVER_URL=...` line,
//! or prose with a link in it. [`parse_installation_code`] applies a fixed
//! sequence of heuristics and always returns a [`ServerConfig`].
//!
//! Order, first match wins:
//!
//! 1. The first `http://` or `https://` run of non-whitespace anywhere in the
//!    text. This wins even over a structured document, so a documentation
//!    link that appears before the real endpoint will be picked.
//! 2. The whole text as JSON, reading `serverUrl`/`url` and `apiKey`/`key`.
//! 3. `server_url=`/`api-key:` style fragments.

use crate::types::InspectorError;
use inspector_types::ServerConfig;
use inspector_util::{redact_json, redact_sensitive};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("bare url regex should compile"));

static API_KEY_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)api[-_]?key[=:]\s*["']?([^"'\s]+)"#).expect("api key regex should compile"));

static SERVER_URL_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)server[-_]?url[=:]\s*["']?([^"'\s]+)"#).expect("server url regex should compile"));

const URL_FIELDS: &[&str] = &["serverUrl", "url"];
const KEY_FIELDS: &[&str] = &["apiKey", "key"];

/// Parse an installation code into a server configuration.
///
/// Never fails. When the text cannot be read at all the result has an empty
/// `server_url`, no API key, and the original text in `installation_code`.
pub fn parse_installation_code(code: &str) -> ServerConfig {
    match try_parse(code) {
        Ok(config) => config,
        Err(error) => {
            warn!(error = %error, "Failed to parse installation code");
            ServerConfig {
                server_url: String::new(),
                api_key: None,
                installation_code: Some(code.to_string()),
            }
        }
    }
}

fn try_parse(code: &str) -> Result<ServerConfig, InspectorError> {
    if let Some(found) = BARE_URL.find(code) {
        debug!(url = %redact_sensitive(found.as_str()), "Installation code contains a bare URL");
        return Ok(ServerConfig {
            server_url: found.as_str().to_string(),
            api_key: None,
            installation_code: Some(code.to_string()),
        });
    }

    match serde_json::from_str::<Value>(code) {
        Ok(document) => from_document(code, &document),
        Err(_) => Ok(from_fragments(code)),
    }
}

fn from_document(code: &str, document: &Value) -> Result<ServerConfig, InspectorError> {
    if document.is_null() {
        return Err(InspectorError::parse("the document is null"));
    }

    debug!(document = %redact_json(document), "Installation code parsed as a JSON document");
    Ok(ServerConfig {
        server_url: first_non_empty(document, URL_FIELDS),
        api_key: Some(first_non_empty(document, KEY_FIELDS)),
        installation_code: Some(code.to_string()),
    })
}

fn first_non_empty(document: &Value, fields: &[&str]) -> String {
    fields
        .iter()
        .filter_map(|field| document.get(*field).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn from_fragments(code: &str) -> ServerConfig {
    let config = ServerConfig {
        server_url: first_capture(&SERVER_URL_FRAGMENT, code),
        api_key: Some(first_capture(&API_KEY_FRAGMENT, code)),
        installation_code: Some(code.to_string()),
    };
    debug!(
        found_url = !config.server_url.is_empty(),
        found_key = config.bearer_token().is_some(),
        "Installation code parsed from key-value fragments"
    );
    config
}

fn first_capture(pattern: &Regex, code: &str) -> String {
    pattern
        .captures(code)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
