use crate::config::Context;
use crate::sanitizer::RawResponse;
use crate::util::CliError;

use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

/// Resolves a `get` target: absolute URLs are used as is, anything else is a
/// path on the context's API server.
pub fn resolve_target(target: &str, context: Option<&Context>) -> Result<Url, CliError> {
    if let Ok(url) = Url::parse(target) {
        if url.has_host() {
            return Ok(url);
        }
    }

    let context = context.ok_or_else(|| {
        CliError::ConfigIssue(format!(
            "`{}` is not an absolute URL and no context is configured",
            target
        ))
    })?;

    context
        .api_url
        .join(target)
        .map_err(|e| CliError::InvalidInput(format!("Invalid path `{}`: {}", target, e)))
}

pub async fn get(
    url: Url,
    token: Option<&str>,
    context: Option<&Context>,
) -> Result<RawResponse, CliError> {
    let mut client = Client::builder();
    if let Some(timeout) = context.and_then(Context::timeout) {
        client = client.timeout(timeout);
    }
    let client = client.build()?;

    log::debug!("GET {}", url);
    let mut request = client.get(url).header(ACCEPT, "application/json");
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    log::debug!("HTTP response: {}", response.status());

    read(response).await
}

/// Reads the body to completion. The response is consumed, which releases the
/// connection whatever happens next.
async fn read(response: Response) -> Result<RawResponse, CliError> {
    let status = response.status();
    let content_length = response.content_length();
    let body = response.bytes().await?.to_vec();

    if !status.is_success() {
        return Err(CliError::Service(error_message(&body), status.as_u16()));
    }

    Ok(RawResponse {
        status,
        content_length,
        body: Some(body),
    })
}

/// API servers answer errors with a `Status` object, show its message if there is one.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|status| status["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string())
}
