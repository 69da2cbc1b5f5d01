use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::domain::generation::errors::GenerationError;

/// Sends a prepared request and decodes a 2xx JSON envelope.
///
/// Non-2xx statuses keep the response body verbatim for diagnostics.
pub(super) async fn send_json<R: DeserializeOwned>(
    provider: &str,
    request: RequestBuilder,
) -> Result<R, GenerationError> {
    let response = request.send().await.map_err(|e| {
        error!("{} request failed: {}", provider, e);
        GenerationError::Transport {
            provider: provider.to_string(),
            reason: e.to_string(),
        }
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        error!("Failed to read {} response body: {}", provider, e);
        GenerationError::Transport {
            provider: provider.to_string(),
            reason: e.to_string(),
        }
    })?;

    if !status.is_success() {
        error!("{} API error: {} - {}", provider, status, body);
        return Err(GenerationError::Provider {
            provider: provider.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        error!("Failed to decode {} response: {}", provider, e);
        GenerationError::MalformedResponse {
            provider: provider.to_string(),
            reason: e.to_string(),
        }
    })
}
