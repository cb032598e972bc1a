//! Server prober.
//!
//! One test is a connectivity probe followed, if the server is reachable, by a
//! functionality probe. [`ServerProber::test_server`] never returns an error:
//! configuration problems and connection failures become a failed
//! [`TestResult`], and completion failures are reported inside its
//! functionality section.
//!
//! The prober holds no per-test state. Reusing one prober for sequential tests
//! only shares the HTTP connection pool.

mod connection;
mod functionality;

use crate::config::{ProbeSettings, validate_server_url};
use crate::types::InspectorError;
use connection::probe_connection;
use functionality::probe_functionality;
use inspector_types::{FunctionalityTest, ServerConfig, ServerInfo, TestResult};
use inspector_util::{normalize_server_url, redact_sensitive};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

/// Shown when neither the health endpoint nor its fallback answered usefully.
pub const CONNECTION_FAILED_MESSAGE: &str =
    "Could not establish connection to the MCP server. The server might be offline or the URL is incorrect.";

/// Used for `ServerInfo::name` when the URL has no host.
pub const FALLBACK_SERVER_NAME: &str = "MCP Server";

/// Used for `ServerInfo::version` when the completion payload names no model.
pub const UNKNOWN_VERSION: &str = "Unknown";

const SERVER_DESCRIPTION: &str = "MCP server is responding to requests";

/// Runs connectivity and functionality probes against MCP servers.
#[derive(Debug, Clone)]
pub struct ServerProber {
    client: Client,
    settings: ProbeSettings,
}

impl ServerProber {
    /// Creates a prober with its own HTTP client.
    pub fn new(settings: ProbeSettings) -> Result<Self, InspectorError> {
        let client = Client::builder().build().map_err(InspectorError::Client)?;
        Ok(Self::with_client(client, settings))
    }

    /// Creates a prober around an existing client.
    ///
    /// Per-request timeouts from `settings` are applied on top of whatever the
    /// client was configured with.
    pub fn with_client(client: Client, settings: ProbeSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    /// Test a server and return a complete result record.
    pub async fn test_server(&self, config: &ServerConfig) -> TestResult {
        match self.run(config).await {
            Ok(result) => result,
            Err(error) => {
                warn!(error = %redact_sensitive(&error.to_string()), "MCP server test failed");
                TestResult::connection_failed(None, error.to_string())
            }
        }
    }

    async fn run(&self, config: &ServerConfig) -> Result<TestResult, InspectorError> {
        let server_url = normalize_server_url(&config.server_url);
        validate_server_url(&server_url)?;
        let bearer_token = config.bearer_token();

        info!(server = %redact_sensitive(&server_url), authenticated = bearer_token.is_some(), "Testing MCP server");

        let started = Instant::now();
        let connection = probe_connection(&self.client, &self.settings, &server_url, bearer_token).await;
        let response_time_ms = round_millis(started.elapsed());

        let outcome = match connection {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    server = %redact_sensitive(&server_url),
                    response_time_ms,
                    reason = %error,
                    "Connectivity probe failed"
                );
                return Ok(TestResult::connection_failed(Some(response_time_ms), CONNECTION_FAILED_MESSAGE));
            }
        };
        debug!(
            endpoint = %redact_sensitive(&outcome.endpoint),
            status = outcome.status,
            response_time_ms,
            "Connectivity probe succeeded"
        );

        let functionality = probe_functionality(&self.client, &self.settings, &server_url, bearer_token).await;
        let server_info = server_info(&server_url, &functionality);
        info!(
            server = %server_info.name,
            success = functionality.success,
            response_time_ms,
            "MCP server test finished"
        );

        Ok(TestResult::connected(response_time_ms, server_info, functionality))
    }
}

/// Test a server with default settings.
///
/// Equivalent to `ServerProber::new(ProbeSettings::default())` followed by
/// [`ServerProber::test_server`]; a client that cannot be built yields a failed
/// result rather than an error.
pub async fn test_server(config: &ServerConfig) -> TestResult {
    match ServerProber::new(ProbeSettings::default()) {
        Ok(prober) => prober.test_server(config).await,
        Err(error) => {
            warn!(error = %error, "Could not create prober");
            TestResult::connection_failed(None, error.to_string())
        }
    }
}

fn server_info(server_url: &str, functionality: &FunctionalityTest) -> ServerInfo {
    ServerInfo {
        name: server_name(server_url),
        version: functionality
            .reported_model()
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        description: SERVER_DESCRIPTION.to_string(),
    }
}

fn server_name(server_url: &str) -> String {
    Url::parse(server_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| FALLBACK_SERVER_NAME.to_string())
}

fn round_millis(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64() * 1000.0).round() as u64
}
