//! Functionality probe.
//!
//! Posts a short test prompt to each configured completion path in turn and
//! stops at the first 2xx answer. When every path fails, the failure of the
//! last attempt is the one reported.

use crate::config::ProbeSettings;
use crate::types::FunctionalityFailure;
use inspector_types::FunctionalityTest;
use inspector_util::http::{decode_response_body, join_endpoint, status_text, truncate_response_preview};
use inspector_util::redact_sensitive;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Request body sent to completion endpoints.
#[derive(Debug, Serialize)]
struct CompletionProbe<'a> {
    prompt: &'a str,
    max_tokens: u32,
}

pub(crate) async fn probe_functionality(
    client: &Client,
    settings: &ProbeSettings,
    server_url: &str,
    bearer_token: Option<&str>,
) -> FunctionalityTest {
    let payload = CompletionProbe {
        prompt: &settings.test_prompt,
        max_tokens: settings.max_tokens,
    };

    let mut last_failure = None;
    for path in &settings.completion_paths {
        let url = join_endpoint(server_url, path);
        match post_completion(client, settings, &url, bearer_token, &payload).await {
            Ok(response) => {
                debug!(url = %redact_sensitive(&url), "Completion endpoint responded");
                return FunctionalityTest::passed(response);
            }
            Err(failure) => {
                warn!(
                    url = %redact_sensitive(&url),
                    status = ?failure.status(),
                    error = %redact_sensitive(&failure.to_string()),
                    "Completion endpoint failed"
                );
                last_failure = Some(failure);
            }
        }
    }

    match last_failure {
        Some(failure) => FunctionalityTest::failed(failure.to_string()),
        None => FunctionalityTest::failed("No completion endpoints are configured"),
    }
}

async fn post_completion(
    client: &Client,
    settings: &ProbeSettings,
    url: &str,
    bearer_token: Option<&str>,
    payload: &CompletionProbe<'_>,
) -> Result<Value, FunctionalityFailure> {
    let mut request = client.post(url).timeout(settings.functionality_timeout()).json(payload);
    if let Some(token) = bearer_token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .await
        .map_err(|error| FunctionalityFailure::from_transport(&error))?;

    let status = response.status();
    let text = match response.text().await {
        Ok(text) => text,
        Err(error) if status.is_success() => return Err(FunctionalityFailure::from_transport(&error)),
        Err(_) => String::new(),
    };
    debug!(
        url = %redact_sensitive(url),
        status = status.as_u16(),
        body = %redact_sensitive(&truncate_response_preview(&text, 200)),
        "Completion response received"
    );

    if !status.is_success() {
        return Err(FunctionalityFailure::Status {
            status: status.as_u16(),
            status_text: status_text(status).to_string(),
            body: decode_response_body(&text),
        });
    }

    Ok(decode_response_body(&text).unwrap_or(Value::Null))
}
