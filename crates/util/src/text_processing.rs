//! # Text Processing Utilities
//!
//! Redaction of secret-looking values before text reaches a log line.
//! Installation codes and request summaries routinely carry API keys, so
//! anything the prober traces goes through [`redact_sensitive`] first.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Redacts values that look like secrets in a string.
///
/// Key names and separators are preserved so the redacted text stays useful
/// for debugging; only the secret value is replaced with `[REDACTED]`.
///
/// # Example
/// ```rust
/// use inspector_util::text_processing::redact_sensitive;
///
/// let redacted = redact_sensitive("api_key=abc123 region=us");
/// assert_eq!(redacted, "api_key=[REDACTED] region=us");
///
/// let redacted = redact_sensitive("Authorization: Bearer secret123");
/// assert_eq!(redacted, "Authorization: [REDACTED]");
/// ```
pub fn redact_sensitive(input: &str) -> String {
    redact_sensitive_with(input, "[REDACTED]")
}

/// Redacts sensitive-looking values, using a custom replacement token.
pub fn redact_sensitive_with(input: &str, replacement: &str) -> String {
    let mut redacted = input.to_string();

    for pattern in REDACT_PATTERNS.iter() {
        redacted = pattern
            .replace_all(&redacted, |captures: &regex::Captures| {
                let prefix = captures.get(1).map(|m| m.as_str()).unwrap_or("");
                let suffix = captures.get(3).map(|m| m.as_str()).unwrap_or("");
                format!("{}{}{}", prefix, replacement, suffix)
            })
            .to_string();
    }

    redacted
}

/// Recursively redact every string inside a JSON value.
pub fn redact_json(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(redact_sensitive(s)),
        Value::Array(items) => Value::Array(items.iter().map(redact_json).collect()),
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (key, val) in map.iter() {
                if is_secret_key(key) {
                    out.insert(key.clone(), Value::String("[REDACTED]".to_string()));
                } else {
                    out.insert(key.clone(), redact_json(val));
                }
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

fn is_secret_key(key: &str) -> bool {
    SECRET_KEY_NAME.is_match(key)
}

static SECRET_KEY_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:api[_-]?key|key|token|access[_-]?token|secret|password|authorization)$")
        .expect("secret key regex should compile")
});

// Ordered from most specific to most general. Group 1 is kept, group 2 is
// replaced, group 3 (when present) is kept.
static REDACT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(authorization:\s+)([^\s]+(?:\s+[^\s]+)*)",
        r"(?i)((?:^|\b)Bearer\s+)([A-Za-z0-9\-._~+/]+=*)",
        r#"(?i)("(?:api[_-]?key|key|token|access[_-]?token|secret|password)"\s*:\s*")([^"]*)(")"#,
        r"(?i)([?&](?:api[_-]?key|key|token|access[_-]?token)=)([^&\s#]+)",
        r#"(?i)((?:api[\s_-]?key|auth[\s_-]?token|token|secret|password)\s*[:=]\s*["']?)([^\s,;&"']+)"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("redaction regex should compile"))
    .collect()
});
