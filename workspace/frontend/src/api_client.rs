pub mod recommendation;

use common::RecommendError;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common POST request handler.
///
/// Sends `body` as JSON and decodes a JSON response. A non-OK status becomes
/// [`RecommendError::RequestFailed`] without reading the body; transport and
/// decoding failures keep the message of the layer that produced them.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, RecommendError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            transport_error(e)
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            transport_error(e)
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        return Err(RecommendError::RequestFailed {
            status: response.status(),
        });
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let text = response.text().await.map_err(|e| {
        log::error!("POST {} - Failed to read response: {}", endpoint, e);
        transport_error(e)
    })?;

    let parsed = decode(&text).map_err(|e| {
        log::error!("POST {} - {}", endpoint, e);
        e
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(parsed)
}

/// Browser failures surface only their message ("Failed to fetch"), not the
/// JS error name that gloo prepends.
fn transport_error(error: gloo_net::Error) -> RecommendError {
    match error {
        gloo_net::Error::JsError(js) => RecommendError::Transport(js.message),
        other => RecommendError::Transport(other.to_string()),
    }
}

fn decode<T>(body: &str) -> Result<T, RecommendError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| RecommendError::Parse(e.to_string()))
}
