// Token acquisition logic

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use super::types::{AccessTokenRequest, AccessTokenResponse};
use crate::error::{Error, Result};

pub const ACCESS_TOKEN_PATH: &str = "/api/1/access_token";

/// Exchange the API login for a fresh bearer token.
///
/// Only `Content-Type` is sent; the call never carries an Authorization header.
pub async fn request_token(
    client: &Client,
    base_url: &str,
    api_login: &str,
    timeout: Duration,
) -> Result<String> {
    let url = format!("{}{}", base_url, ACCESS_TOKEN_PATH);
    tracing::debug!(url = %url, "Requesting iiko access token");

    let response = client
        .post(&url)
        .timeout(timeout)
        .header(CONTENT_TYPE, "application/json")
        .json(&AccessTokenRequest { api_login })
        .send()
        .await?;

    let status = response.status();
    let body = response.bytes().await?;

    parse_token_response(&body).map_err(|e| {
        tracing::error!(status = %status, error = %e, "Access token request rejected");
        e
    })
}

/// Interpret an access token response body.
///
/// An unparsable body is treated like a response without token or description.
fn parse_token_response(body: &[u8]) -> Result<String> {
    let data: AccessTokenResponse = serde_json::from_slice(body).unwrap_or_default();

    if let Some(description) = data.error_description.filter(|d| !d.is_empty()) {
        tracing::debug!(correlation_id = ?data.correlation_id, "Access token error");
        return Err(Error::Auth(description));
    }

    match data.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(Error::Auth("empty token".to_string())),
    }
}
