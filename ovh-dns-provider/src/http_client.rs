//! Request sending and response decoding.
//!
//! Signing stays with the provider, which builds the `RequestBuilder` itself.
//! Requests are sent once; nothing is retried.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Shared send and decode steps.
pub struct HttpUtils;

/// A response was never received.
fn transport_error(provider_name: &str, e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    }
}

impl HttpUtils {
    /// Send `request` and read the whole body.
    ///
    /// Any HTTP status is returned as `Ok((status, body))`; status handling is left to the
    /// caller. `method_name` and `url` are only used for logging.
    pub async fn execute_request(
        request: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] --> {method_name} {url}");

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(provider_name, &e))?;
        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{provider_name}] <-- {status} {method_name} {url}: {}",
            truncate_for_log(&body)
        );
        Ok((status, body))
    }

    /// Decode a JSON body.
    ///
    /// A blank body decodes as JSON `null`, so `()` and `Option<T>` targets accept it.
    pub fn parse_json<T>(body: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let text = if body.trim().is_empty() { "null" } else { body };

        serde_json::from_str(text).map_err(|e| {
            log::error!(
                "[{provider_name}] Cannot decode response ({e}): {}",
                truncate_for_log(body)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
