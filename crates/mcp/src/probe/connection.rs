//! Connectivity probe.
//!
//! A GET against the health path decides whether the server is up. Any status
//! below 500 counts: a 401 or 403 still proves something is listening. A 404
//! on the health path is retried against the bare server URL, since many
//! servers simply have no health route. The whole probe, fallback included,
//! shares one time budget.

use crate::config::ProbeSettings;
use crate::types::InspectorError;
use inspector_util::http::join_endpoint;
use inspector_util::redact_sensitive;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// The endpoint that answered the connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConnectionOutcome {
    pub endpoint: String,
    pub status: u16,
}

pub(crate) async fn probe_connection(
    client: &Client,
    settings: &ProbeSettings,
    server_url: &str,
    bearer_token: Option<&str>,
) -> Result<ConnectionOutcome, InspectorError> {
    let deadline = Instant::now() + settings.connect_timeout();
    let health_url = join_endpoint(server_url, &settings.health_path);

    let status = get_status(client, &health_url, bearer_token, deadline).await?;
    if status == StatusCode::NOT_FOUND && settings.root_fallback_on_not_found {
        debug!(url = %redact_sensitive(&health_url), "Health endpoint not found; probing server root");
        let status = get_status(client, server_url, bearer_token, deadline).await?;
        return accept(server_url, status);
    }

    accept(&health_url, status)
}

async fn get_status(
    client: &Client,
    url: &str,
    bearer_token: Option<&str>,
    deadline: Instant,
) -> Result<StatusCode, InspectorError> {
    let remaining = deadline.saturating_duration_since(Instant::now());
    if remaining == Duration::ZERO {
        return Err(InspectorError::connection(format!(
            "Connection probe to {} ran out of time",
            redact_sensitive(url)
        )));
    }

    let mut request = client.get(url).timeout(remaining);
    if let Some(token) = bearer_token {
        request = request.bearer_auth(token);
    }

    debug!(url = %redact_sensitive(url), timeout_ms = remaining.as_millis() as u64, "Sending connectivity probe");
    match request.send().await {
        Ok(response) => Ok(response.status()),
        Err(error) => {
            let message = redact_sensitive(&error.to_string());
            warn!(url = %redact_sensitive(url), timeout = error.is_timeout(), error = %message, "Connectivity probe failed");
            Err(InspectorError::connection(message))
        }
    }
}

fn accept(endpoint: &str, status: StatusCode) -> Result<ConnectionOutcome, InspectorError> {
    if status.as_u16() >= 500 {
        warn!(url = %redact_sensitive(endpoint), status = status.as_u16(), "Server error on connectivity probe");
        return Err(InspectorError::connection(format!(
            "{} returned HTTP {}",
            redact_sensitive(endpoint),
            status.as_u16()
        )));
    }

    debug!(url = %redact_sensitive(endpoint), status = status.as_u16(), "Server reachable");
    Ok(ConnectionOutcome {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
    })
}
