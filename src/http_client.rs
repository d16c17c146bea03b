use bytes::Bytes;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::TokenManager;
use crate::detect;
use crate::error::{ApiResult, Error, Result};
use crate::session::SharedSession;

/// Status and fully buffered body of an iiko response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HTTP client for the iiko API with token handling
pub struct IikoHttpClient {
    /// Underlying transport
    client: Client,

    /// Base URL without trailing slash
    base_url: String,

    /// Applied to every HTTP call, including each half of a 401 retry
    timeout: Duration,

    /// Log request and response bodies
    debug: bool,

    /// Attach raw body text to domain errors
    return_raw: bool,

    /// Token manager
    auth: Arc<TokenManager>,

    /// Shared with the token manager; holds the last raw response
    session: SharedSession,
}

impl IikoHttpClient {
    pub fn new(
        client: Client,
        base_url: String,
        timeout: Duration,
        debug: bool,
        return_raw: bool,
        auth: Arc<TokenManager>,
        session: SharedSession,
    ) -> Self {
        Self {
            client,
            base_url,
            timeout,
            debug,
            return_raw,
            auth,
            session,
        }
    }

    /// Token manager used by this client
    pub fn auth(&self) -> &TokenManager {
        &self.auth
    }

    /// Send a JSON POST to `path`.
    ///
    /// Refreshes a stale token before sending. A 401 answer triggers one
    /// refresh and exactly one retry whose response is returned as is.
    /// Other statuses are not interpreted here.
    pub async fn send<P>(&self, path: &str, payload: &P) -> Result<RawResponse>
    where
        P: Serialize + ?Sized,
    {
        self.auth.ensure_fresh().await?;

        let body = serde_json::to_vec(payload)
            .map(Bytes::from)
            .map_err(|source| Error::Encode {
                path: path.to_string(),
                source,
            })?;
        let url = format!("{}{}", self.base_url, path);

        if self.debug {
            tracing::debug!(
                path = path,
                payload = %String::from_utf8_lossy(&body),
                "Request payload"
            );
        }

        let (first, generation) = self.execute(&url, body.clone(), 1).await?;

        let response = if first.status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path = path, "Received 401, refreshing token and retrying...");

            if let Err(e) = self.auth.refresh_if_unchanged(generation).await {
                tracing::error!("Token refresh failed: {}", e);
                return Err(e);
            }

            let (retried, _) = self.execute(&url, body, 2).await?;
            retried
        } else {
            first
        };

        if self.debug {
            tracing::debug!(
                path = path,
                status = %response.status,
                body = %String::from_utf8_lossy(&response.body),
                "Response body"
            );
        }

        self.session.write().await.last_raw = response.body.clone();
        Ok(response)
    }

    /// Execute one POST with the current token.
    /// Returns the response and the token generation it was sent with.
    async fn execute(&self, url: &str, body: Bytes, attempt: u32) -> Result<(RawResponse, u64)> {
        let (token, generation) = self.auth.snapshot().await;

        let mut request = self
            .client
            .post(url)
            .timeout(self.timeout)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::InvalidHeader("authorization token".to_string()))?;
            request = request.header(AUTHORIZATION, value);
        }

        tracing::debug!(url = %url, attempt = attempt, "Sending HTTP request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                // Categorize the error for better debugging
                let error_kind = if e.is_timeout() {
                    "timeout"
                } else if e.is_connect() {
                    "connection_failed"
                } else if e.is_request() {
                    "request_error"
                } else if e.is_body() {
                    "body_error"
                } else {
                    "unknown"
                };

                tracing::warn!(
                    error_kind = error_kind,
                    error = %e,
                    url = %url,
                    attempt = attempt,
                    "HTTP request error"
                );
                return Err(Error::Http(e));
            }
        };

        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(status = %status, attempt = attempt, "Received HTTP response");

        Ok((RawResponse { status, body }, generation))
    }

    /// Send, check for an embedded API error, then decode into `T`
    pub async fn call<P, T>(&self, path: &str, payload: &P) -> ApiResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(path, payload).await?;

        if let Some(err) =
            detect::domain_error(&response.body, response.status.as_u16(), self.return_raw)
        {
            tracing::warn!(
                path = path,
                status = response.status.as_u16(),
                description = %err.description,
                "iiko API returned an error"
            );
            return Ok(Err(err));
        }

        let value = serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
            path: path.to_string(),
            source,
        })?;

        Ok(Ok(value))
    }

    /// Untyped variant of [`call`](Self::call) for endpoints without a model
    pub async fn call_value<P>(&self, path: &str, payload: &P) -> ApiResult<serde_json::Value>
    where
        P: Serialize + ?Sized,
    {
        self.call(path, payload).await
    }

    /// Body of the most recent response
    pub async fn last_raw(&self) -> Bytes {
        self.session.read().await.last_raw.clone()
    }
}
