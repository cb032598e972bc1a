//! Human-readable rendering of a test result.

use inspector_types::{FunctionalityTest, ServerInfo, TestResult};
use std::fmt;

const NOT_AVAILABLE: &str = "Not available";

/// Render a result as a multi-section text report.
pub fn render(result: &TestResult) -> String {
    Report(result).to_string()
}

/// One-line outcome notice.
pub fn notice(result: &TestResult) -> String {
    if result.success {
        "MCP server test completed successfully".to_string()
    } else {
        let detail = result
            .error_message
            .as_deref()
            .unwrap_or("See test results for details");
        format!("MCP server test failed: {detail}")
    }
}

struct Report<'a>(&'a TestResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Test Results: {}", result.badge())?;
        writeln!(f, "Connection: {}", result.connection_status.display())?;
        if let Some(ms) = result.response_time_ms {
            writeln!(f, "Response time: {ms}ms")?;
        }

        if let Some(info) = &result.server_info {
            write_server_info(f, info)?;
        }
        if let Some(functionality) = &result.functionality_test {
            write_functionality(f, functionality)?;
        }
        if let Some(message) = &result.error_message {
            writeln!(f, "\nError")?;
            writeln!(f, "{}", indent(message))?;
        }
        Ok(())
    }
}

fn write_server_info(f: &mut fmt::Formatter<'_>, info: &ServerInfo) -> fmt::Result {
    writeln!(f, "\nServer Information")?;
    writeln!(f, "  Name:        {}", or_not_available(&info.name))?;
    writeln!(f, "  Version:     {}", or_not_available(&info.version))?;
    writeln!(f, "  Description: {}", or_not_available(&info.description))
}

fn write_functionality(f: &mut fmt::Formatter<'_>, functionality: &FunctionalityTest) -> fmt::Result {
    let label = if functionality.success { "Passed" } else { "Failed" };
    writeln!(f, "\nFunctionality Test: {label}")?;
    if let Some(error) = &functionality.error {
        writeln!(f, "{}", indent(&format!("Error: {error}")))?;
    } else if let Some(response) = &functionality.response {
        let pretty = serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
        writeln!(f, "{}", indent(&pretty))?;
    }
    Ok(())
}

fn or_not_available(value: &str) -> &str {
    if value.is_empty() { NOT_AVAILABLE } else { value }
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("  {line}")).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn info() -> ServerInfo {
        ServerInfo {
            name: "mcp.example.com".to_string(),
            version: String::new(),
            description: "MCP server is responding to requests".to_string(),
        }
    }

    #[test]
    fn renders_passing_result() {
        let result = TestResult::connected(42, info(), FunctionalityTest::passed(json!({"model": "m"})));
        let text = render(&result);
        assert!(text.starts_with("Test Results: Passed\nConnection: Connected\nResponse time: 42ms\n"));
        assert!(text.contains("  Name:        mcp.example.com"));
        assert!(text.contains("  Version:     Not available"));
        assert!(text.contains("Functionality Test: Passed"));
        assert!(text.contains("  {\n    \"model\": \"m\"\n  }"));
        assert!(!text.contains("\nError"));
    }

    #[test]
    fn renders_functionality_error() {
        let result = TestResult::connected(
            7,
            info(),
            FunctionalityTest::failed("Server responded with error: 500 - Internal Server Error\nDetails: \"x\""),
        );
        let text = render(&result);
        assert!(text.starts_with("Test Results: Failed\nConnection: Connected"));
        assert!(text.contains("Functionality Test: Failed\n  Error: Server responded with error: 500"));
        assert!(text.contains("\n  Details: \"x\""));
    }

    #[test]
    fn renders_connection_failure() {
        let result = TestResult::connection_failed(Some(5000), "Could not establish connection");
        let text = render(&result);
        assert!(text.contains("Connection: Failed"));
        assert!(text.contains("Response time: 5000ms"));
        assert!(!text.contains("Server Information"));
        assert!(text.ends_with("\nError\n  Could not establish connection\n"));
    }

    #[test]
    fn multi_line_errors_are_indented() {
        let result = TestResult::connection_failed(None, "first\nsecond");
        assert!(render(&result).ends_with("\nError\n  first\n  second\n"));
    }

    #[test]
    fn notice_reflects_outcome() {
        let passed = TestResult::connected(1, info(), FunctionalityTest::passed(json!(null)));
        assert_eq!(notice(&passed), "MCP server test completed successfully");

        let failed = TestResult::connection_failed(None, "Server URL is required");
        assert_eq!(notice(&failed), "MCP server test failed: Server URL is required");

        let functional_failure = TestResult::connected(1, info(), FunctionalityTest::failed("x"));
        assert_eq!(notice(&functional_failure), "MCP server test failed: See test results for details");
    }
}
