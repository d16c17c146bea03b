use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::Duration;
use tokio::sync::Mutex;

use super::refresh;
use crate::error::Result;
use crate::session::SharedSession;

/// Lifetime of an iiko access token
pub const TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Token manager
/// Owns the bearer token lifecycle with lazy refresh and thread-safe access
pub struct TokenManager {
    /// Token, timestamp and last raw response
    session: SharedSession,

    /// Serializes refreshes so racing callers share one network call
    refresh_lock: Mutex<()>,

    /// HTTP client for token requests
    client: Client,

    base_url: String,

    /// API login exchanged for tokens
    api_login: String,

    /// Per-call timeout
    timeout: Duration,
}

impl TokenManager {
    pub fn new(
        session: SharedSession,
        client: Client,
        base_url: String,
        api_login: String,
        timeout: Duration,
    ) -> Self {
        Self {
            session,
            refresh_lock: Mutex::new(()),
            client,
            base_url,
            api_login,
            timeout,
        }
    }

    /// Install a token obtained elsewhere; its lifetime starts now.
    /// Empty tokens are ignored.
    pub async fn set_token(&self, token: String) {
        if token.is_empty() {
            return;
        }
        let mut state = self.session.write().await;
        state.install_token(token, Utc::now());
    }

    /// Check if the token is missing or older than [`TOKEN_TTL`]
    pub async fn is_stale(&self) -> bool {
        self.is_stale_at(Utc::now()).await
    }

    /// Staleness relative to an explicit instant
    pub async fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        self.stale_generation(now).await.is_some()
    }

    /// Generation of the current token if it needs replacing
    async fn stale_generation(&self, now: DateTime<Utc>) -> Option<u64> {
        let state = self.session.read().await;

        let stale = match (&state.token, state.obtained_at) {
            (Some(token), Some(obtained_at)) if !token.is_empty() => {
                let elapsed = now - obtained_at;
                elapsed.num_milliseconds() >= TOKEN_TTL.as_millis() as i64
            }
            _ => true,
        };

        stale.then_some(state.generation)
    }

    /// Current token and its generation
    pub async fn snapshot(&self) -> (Option<String>, u64) {
        let state = self.session.read().await;
        (state.token.clone(), state.generation)
    }

    /// Refresh if the token is stale
    pub async fn ensure_fresh(&self) -> Result<()> {
        match self.stale_generation(Utc::now()).await {
            Some(generation) => self.refresh_if_unchanged(generation).await,
            None => Ok(()),
        }
    }

    /// Unconditionally obtain a new token
    pub async fn refresh(&self) -> Result<()> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    /// Obtain a new token unless one was installed after `generation` was observed
    pub async fn refresh_if_unchanged(&self, generation: u64) -> Result<()> {
        let _guard = self.refresh_lock.lock().await;

        let current = self.session.read().await.generation;
        if current != generation {
            tracing::debug!(
                seen = generation,
                current = current,
                "Token already refreshed by a concurrent caller"
            );
            return Ok(());
        }

        self.refresh_locked().await
    }

    async fn refresh_locked(&self) -> Result<()> {
        tracing::debug!("Refreshing access token...");

        let token =
            refresh::request_token(&self.client, &self.base_url, &self.api_login, self.timeout)
                .await?;

        tracing::info!(
            "Access token refreshed (token: {}...)",
            token.chars().take(8).collect::<String>()
        );

        let mut state = self.session.write().await;
        state.install_token(token, Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::session;
    use chrono::Duration as ChronoDuration;

    fn manager(base_url: &str) -> TokenManager {
        TokenManager::new(
            session::new_shared(),
            Client::new(),
            base_url.to_string(),
            "test-login".to_string(),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_missing_token_is_stale() {
        let manager = manager("http://127.0.0.1:1");
        assert!(manager.is_stale().await);
    }

    #[tokio::test]
    async fn test_empty_token_is_stale() {
        let manager = manager("http://127.0.0.1:1");
        {
            let mut state = manager.session.write().await;
            state.token = Some(String::new());
            state.obtained_at = Some(Utc::now());
        }
        assert!(manager.is_stale().await);
    }

    #[tokio::test]
    async fn test_ttl_boundary() {
        let manager = manager("http://127.0.0.1:1");
        manager.set_token("token".to_string()).await;

        let obtained_at = manager.session.read().await.obtained_at.unwrap();

        let at_14_59 = obtained_at + ChronoDuration::seconds(14 * 60 + 59);
        assert!(!manager.is_stale_at(at_14_59).await);

        let at_15_00 = obtained_at + ChronoDuration::minutes(15);
        assert!(manager.is_stale_at(at_15_00).await);
    }

    #[tokio::test]
    async fn test_set_empty_token_is_ignored() {
        let manager = manager("http://127.0.0.1:1");
        manager.set_token(String::new()).await;
        assert_eq!(manager.snapshot().await, (None, 0));
    }

    #[tokio::test]
    async fn test_refresh_installs_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/access_token")
            .match_header("authorization", mockito::Matcher::Missing)
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"apiLogin": "test-login"}),
            ))
            .with_status(200)
            .with_body(r#"{"correlationId":"c-1","token":"fresh-token"}"#)
            .expect(1)
            .create_async()
            .await;

        let manager = manager(&server.url());
        manager.refresh().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            manager.snapshot().await,
            (Some("fresh-token".to_string()), 1)
        );
        assert!(!manager.is_stale().await);
    }

    #[tokio::test]
    async fn test_refresh_error_description() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/1/access_token")
            .with_status(401)
            .with_body(r#"{"errorDescription":"Login 'test-login' is not authorized"}"#)
            .create_async()
            .await;

        let manager = manager(&server.url());
        let err = manager.refresh().await.unwrap_err();

        assert!(
            matches!(err, Error::Auth(ref d) if d == "Login 'test-login' is not authorized")
        );
        assert_eq!(manager.snapshot().await, (None, 0));
    }

    #[tokio::test]
    async fn test_refresh_empty_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/1/access_token")
            .with_status(200)
            .with_body(r#"{"token":""}"#)
            .create_async()
            .await;

        let manager = manager(&server.url());
        let err = manager.refresh().await.unwrap_err();
        assert!(matches!(err, Error::Auth(ref d) if d == "empty token"));
    }

    #[tokio::test]
    async fn test_refresh_transport_failure() {
        // Nothing listens on port 1
        let manager = manager("http://127.0.0.1:1");
        let err = manager.refresh().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_refresh_if_unchanged_skips_after_concurrent_refresh() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/access_token")
            .with_status(200)
            .with_body(r#"{"token":"fresh-token"}"#)
            .expect(0)
            .create_async()
            .await;

        let manager = manager(&server.url());
        let (_, seen) = manager.snapshot().await;
        manager.set_token("from-elsewhere".to_string()).await;

        manager.refresh_if_unchanged(seen).await.unwrap();

        mock.assert_async().await;
        assert_eq!(manager.snapshot().await.0.as_deref(), Some("from-elsewhere"));
    }

    #[tokio::test]
    async fn test_ensure_fresh_does_nothing_for_valid_token() {
        let manager = manager("http://127.0.0.1:1");
        manager.set_token("valid".to_string()).await;
        // Would fail with a transport error if it tried the network
        manager.ensure_fresh().await.unwrap();
    }
}
