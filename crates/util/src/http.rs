//! # HTTP Utilities
//!
//! Helpers for building probe URLs and turning raw HTTP responses into
//! values that can be shown to a user.

use reqwest::StatusCode;
use serde_json::Value;

/// Trim whitespace and strip every trailing `/` from a server URL.
///
/// # Example
/// ```rust
/// use inspector_util::http::normalize_server_url;
///
/// assert_eq!(normalize_server_url("  https://mcp.example.com/api//  "), "https://mcp.example.com/api");
/// assert_eq!(normalize_server_url("///"), "");
/// ```
pub fn normalize_server_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Append an endpoint path to a normalized base URL.
///
/// Plain concatenation is intentional: a base URL with a path prefix
/// (`https://host/mcp`) keeps that prefix (`https://host/mcp/health`), which
/// `Url::join` would drop for absolute paths.
pub fn join_endpoint(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Reason phrase for a status code, or an empty string for unknown codes.
pub fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}

/// Decode a response body, preferring JSON and falling back to the raw text.
///
/// Returns `None` for an empty (or whitespace-only) body.
pub fn decode_response_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str::<Value>(text).unwrap_or_else(|_| Value::String(text.to_string())))
}

/// Collapse whitespace and cap a response body for log output.
pub fn truncate_response_preview(text: &str, limit: usize) -> String {
    if text.trim().is_empty() {
        return "<empty>".to_string();
    }

    let mut preview = String::new();
    for ch in text.chars() {
        if preview.len() >= limit {
            preview.push_str("...");
            break;
        }
        match ch {
            '\n' | '\r' | '\t' => {
                if !preview.ends_with(' ') {
                    preview.push(' ');
                }
            }
            _ => preview.push(ch),
        }
    }

    preview.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn join_keeps_path_prefix() {
        assert_eq!(join_endpoint("https://host/mcp", "/health"), "https://host/mcp/health");
        assert_eq!(join_endpoint("https://host", "v1/completions"), "https://host/v1/completions");
        assert_eq!(join_endpoint("https://host", ""), "https://host");
    }

    #[test]
    fn status_text_uses_reason_phrase() {
        assert_eq!(status_text(StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(status_text(StatusCode::from_u16(599).unwrap()), "");
    }

    #[test]
    fn decodes_json_or_text() {
        assert_eq!(decode_response_body(r#"{"a":1}"#), Some(json!({"a": 1})));
        assert_eq!(decode_response_body("plain"), Some(json!("plain")));
        assert_eq!(decode_response_body("  "), None);
    }

    #[test]
    fn preview_collapses_and_truncates() {
        assert_eq!(truncate_response_preview("a\n\nb", 10), "a b");
        assert_eq!(truncate_response_preview("", 10), "<empty>");
        assert_eq!(truncate_response_preview("abcdef", 3), "abc...");
    }
}
