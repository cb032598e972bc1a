//! Result record produced by a single server test.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of the connectivity probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// The server answered the health or root probe.
    Connected,
    /// The server could not be reached, or the configuration was unusable.
    Failed,
}

impl ConnectionStatus {
    /// Get the display text for this status.
    pub fn display(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Failed => "Failed",
        }
    }

    /// Check if the server was reached.
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

/// Descriptive details gathered about a reachable server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Outcome of the completions probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalityTest {
    /// Whether one of the completion endpoints answered with a 2xx status.
    pub success: bool,

    /// Raw response payload from the endpoint that succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,

    /// Classified failure message when both endpoints failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FunctionalityTest {
    /// A successful probe carrying the server's payload.
    pub fn passed(response: Value) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
        }
    }

    /// A failed probe carrying a human-readable reason.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
        }
    }

    /// The `model` field of the response payload, when the server reported one.
    pub fn reported_model(&self) -> Option<String> {
        match self.response.as_ref()?.get("model")? {
            Value::Null => None,
            Value::String(model) if model.is_empty() => None,
            Value::String(model) => Some(model.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Unified record describing one test round-trip.
///
/// Construct through [`TestResult::connected`] or
/// [`TestResult::connection_failed`]; both keep `success` consistent with the
/// connection and functionality outcomes, and a failed connection never
/// carries server info or a functionality test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub success: bool,

    pub connection_status: ConnectionStatus,

    /// Wall-clock duration of the connectivity probe, in whole milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functionality_test: Option<FunctionalityTest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl TestResult {
    /// Result for a server that passed the connectivity probe.
    pub fn connected(response_time_ms: u64, server_info: ServerInfo, functionality_test: FunctionalityTest) -> Self {
        Self {
            success: functionality_test.success,
            connection_status: ConnectionStatus::Connected,
            response_time_ms: Some(response_time_ms),
            server_info: Some(server_info),
            functionality_test: Some(functionality_test),
            error_message: None,
        }
    }

    /// Result for a test that stopped before the functionality probe.
    ///
    /// `response_time_ms` is `None` when no network call was attempted.
    pub fn connection_failed(response_time_ms: Option<u64>, error_message: impl Into<String>) -> Self {
        Self {
            success: false,
            connection_status: ConnectionStatus::Failed,
            response_time_ms,
            server_info: None,
            functionality_test: None,
            error_message: Some(error_message.into()),
        }
    }

    /// Short pass/fail label used by result renderers.
    pub fn badge(&self) -> &'static str {
        if self.success { "Passed" } else { "Failed" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn info() -> ServerInfo {
        ServerInfo {
            name: "mcp.example.com".into(),
            version: "gpt-test".into(),
            description: "MCP server is responding to requests".into(),
        }
    }

    #[test]
    fn connected_result_takes_success_from_functionality() {
        let passed = TestResult::connected(12, info(), FunctionalityTest::passed(json!({"ok": true})));
        assert!(passed.success);
        assert!(passed.connection_status.is_connected());

        let failed = TestResult::connected(12, info(), FunctionalityTest::failed("boom"));
        assert!(!failed.success);
        assert_eq!(failed.connection_status, ConnectionStatus::Connected);
        assert_eq!(failed.badge(), "Failed");
    }

    #[test]
    fn connection_failure_has_no_server_details() {
        let result = TestResult::connection_failed(Some(5001), "unreachable");
        assert!(!result.success);
        assert_eq!(result.connection_status, ConnectionStatus::Failed);
        assert!(result.server_info.is_none());
        assert!(result.functionality_test.is_none());
        assert_eq!(result.response_time_ms, Some(5001));
    }

    #[test]
    fn serializes_with_wire_names() {
        let result = TestResult::connection_failed(None, "Server URL is required");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "connectionStatus": "failed",
                "errorMessage": "Server URL is required"
            })
        );

        let result = TestResult::connected(3, info(), FunctionalityTest::passed(json!({"model": "x"})));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["connectionStatus"], "connected");
        assert_eq!(value["responseTimeMs"], 3);
        assert_eq!(value["serverInfo"]["name"], "mcp.example.com");
        assert_eq!(value["functionalityTest"]["response"]["model"], "x");
        assert!(value.get("errorMessage").is_none());
    }

    #[test]
    fn reported_model_reads_response_field() {
        assert_eq!(
            FunctionalityTest::passed(json!({"model": "llama"})).reported_model(),
            Some("llama".to_string())
        );
        assert_eq!(FunctionalityTest::passed(json!({"model": ""})).reported_model(), None);
        assert_eq!(FunctionalityTest::passed(json!("plain text")).reported_model(), None);
        assert_eq!(FunctionalityTest::failed("x").reported_model(), None);
    }
}
