//! OVH HTTP request methods

use chrono::Utc;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

use super::OvhProvider;
use super::types::OvhErrorResponse;

impl OvhProvider {
    // ==================== Helpers ====================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a non-2xx response to a [`ProviderError`].
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        let raw = match serde_json::from_str::<OvhErrorResponse>(response_text) {
            Ok(body) => {
                log::debug!(
                    "[{}] Error class={:?} httpCode={:?} errorCode={:?}",
                    self.provider_name(),
                    body.class,
                    body.http_code,
                    body.error_code
                );
                RawApiError::with_status(
                    status,
                    body.message.unwrap_or_else(|| format!("HTTP {status}")),
                )
                .code(body.error_code)
            }
            Err(_) if response_text.trim().is_empty() => {
                RawApiError::with_status(status, format!("HTTP {status}"))
            }
            Err(_) => RawApiError::with_status(
                status,
                format!("HTTP {status}: {}", truncate_for_log(response_text)),
            ),
        };

        let err = self.map_error(raw, ctx);
        if err.is_expected() {
            log::warn!("{err}");
        } else {
            log::error!("{err}");
        }
        Err(err)
    }

    fn serialize_body<B: Serialize>(&self, body: Option<&B>) -> Result<String> {
        let Some(body) = body else {
            return Ok(String::new());
        };
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;
        log::debug!("Request Body: {}", truncate_for_log(&payload));
        Ok(payload)
    }

    /// Offset between the API clock and ours, fetched once per provider.
    async fn server_time_delta(&self) -> Result<i64> {
        self.time_delta
            .get_or_try_init(|| async {
                let server_time: i64 = self
                    .call_unauthenticated::<i64, ()>(
                        Method::GET,
                        "/auth/time",
                        None,
                        ErrorContext::default(),
                    )
                    .await?;
                let delta = server_time - Utc::now().timestamp();
                log::debug!("[{}] Server time delta: {delta}s", self.provider_name());
                Ok::<_, ProviderError>(delta)
            })
            .await
            .copied()
    }

    /// Attach the JSON payload, send, check the status and decode.
    async fn send<T: DeserializeOwned>(
        &self,
        mut request: RequestBuilder,
        method: &Method,
        url: &str,
        payload: String,
        ctx: ErrorContext,
    ) -> Result<T> {
        if !payload.is_empty() {
            request = request
                .header("Content-Type", "application/json")
                .body(payload);
        }

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), method.as_str(), url)
                .await?;

        self.handle_response_error(status, &response_text, ctx)?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    // ==================== Requests ====================

    /// Send a request carrying only `X-Ovh-Application`.
    pub(crate) async fn call_unauthenticated<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        ctx: ErrorContext,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload = self.serialize_body(body)?;
        let url = self.url(path);
        let request = self
            .client
            .request(method.clone(), &url)
            .header("X-Ovh-Application", &self.application_key);

        self.send(request, &method, &url, payload, ctx).await
    }

    /// Send a signed request.
    pub(crate) async fn call<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        ctx: ErrorContext,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let Some(consumer_key) = self.consumer_key.as_deref() else {
            return Err(ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some("No consumer key configured".to_string()),
            });
        };

        let payload = self.serialize_body(body)?;
        let url = self.url(path);
        let timestamp = Utc::now().timestamp() + self.server_time_delta().await?;
        let signature = self.sign(consumer_key, method.as_str(), &url, &payload, timestamp);
        log::trace!(
            "[{}] Signed with consumer key {} at {timestamp}",
            self.provider_name(),
            mask_secret(consumer_key)
        );

        let request = self
            .client
            .request(method.clone(), &url)
            .header("X-Ovh-Application", &self.application_key)
            .header("X-Ovh-Consumer", consumer_key)
            .header("X-Ovh-Timestamp", timestamp.to_string())
            .header("X-Ovh-Signature", signature);

        self.send(request, &method, &url, payload, ctx).await
    }

    /// Signed GET
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, ctx: ErrorContext) -> Result<T> {
        self.call::<T, ()>(Method::GET, path, None, ctx).await
    }

    /// Signed POST
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        self.call(Method::POST, path, Some(body), ctx).await
    }

    /// Signed PUT
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        self.call(Method::PUT, path, Some(body), ctx).await
    }

    /// Signed DELETE
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        self.call::<T, ()>(Method::DELETE, path, None, ctx).await
    }
}
