// Client facade: owns the session and hands out domain group handles

use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::{
    AddressHandle, CommandsHandle, CustomersHandle, DeliveriesHandle, DictionariesHandle,
    EmployeesHandle, MenuHandle, NotificationsHandle, OrdersHandle, TerminalGroupsHandle,
    WebhookParser,
};
use crate::auth::TokenManager;
use crate::config::ClientConfig;
use crate::error::{ApiResult, Result};
use crate::http_client::IikoHttpClient;
use crate::models::{OrganizationsRequest, OrganizationsResponse};
use crate::session::SessionState;

const ORGANIZATIONS_PATH: &str = "/api/1/organizations";

/// iiko Cloud API client.
///
/// Every instance has its own token and last-response slot; clones of the
/// group handles share them.
pub struct Client {
    http: Arc<IikoHttpClient>,

    /// IDs returned by the last successful [`organizations`](Self::organizations) call
    organization_ids: RwLock<Vec<String>>,
}

impl Client {
    /// Build a client without touching the network. The first call acquires
    /// a token unless one was supplied in `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };

        let mut state = SessionState::default();
        if let Some(token) = config.token.filter(|t| !t.is_empty()) {
            state.install_token(token, chrono::Utc::now());
        }
        let session = Arc::new(RwLock::new(state));

        let auth = Arc::new(TokenManager::new(
            session.clone(),
            transport.clone(),
            config.base_url.clone(),
            config.api_login,
            config.timeout,
        ));

        let http = Arc::new(IikoHttpClient::new(
            transport,
            config.base_url,
            config.timeout,
            config.debug,
            config.return_raw,
            auth,
            session,
        ));

        Ok(Self {
            http,
            organization_ids: RwLock::new(Vec::new()),
        })
    }

    /// Build a client and make sure it holds a valid token before returning
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let client = Self::new(config)?;
        client.http.auth().ensure_fresh().await?;
        tracing::info!("iiko client connected");
        Ok(client)
    }

    /// Token manager of this client
    pub fn auth(&self) -> &TokenManager {
        self.http.auth()
    }

    /// Request pipeline, for endpoints outside the typed catalog
    pub fn http(&self) -> &IikoHttpClient {
        &self.http
    }

    /// Organizations available to the API login. Their IDs are remembered
    /// and available through [`organization_ids`](Self::organization_ids).
    pub async fn organizations(
        &self,
        request: &OrganizationsRequest,
    ) -> ApiResult<OrganizationsResponse> {
        let response = self
            .http
            .call::<_, OrganizationsResponse>(ORGANIZATIONS_PATH, request)
            .await?;

        if let Ok(organizations) = &response {
            let ids = organizations.ids();
            tracing::debug!(count = ids.len(), "Stored organization IDs");
            *self.organization_ids.write().await = ids;
        }

        Ok(response)
    }

    pub async fn organization_ids(&self) -> Vec<String> {
        self.organization_ids.read().await.clone()
    }

    /// Body of the most recent response received by this client
    pub async fn last_raw_response(&self) -> Bytes {
        self.http.last_raw().await
    }

    pub fn dictionaries(&self) -> DictionariesHandle {
        DictionariesHandle::new(self.http.clone())
    }

    pub fn menu(&self) -> MenuHandle {
        MenuHandle::new(self.http.clone())
    }

    pub fn orders(&self) -> OrdersHandle {
        OrdersHandle::new(self.http.clone())
    }

    pub fn deliveries(&self) -> DeliveriesHandle {
        DeliveriesHandle::new(self.http.clone())
    }

    pub fn address(&self) -> AddressHandle {
        AddressHandle::new(self.http.clone())
    }

    pub fn terminal_groups(&self) -> TerminalGroupsHandle {
        TerminalGroupsHandle::new(self.http.clone())
    }

    pub fn customers(&self) -> CustomersHandle {
        CustomersHandle::new(self.http.clone())
    }

    pub fn notifications(&self) -> NotificationsHandle {
        NotificationsHandle::new(self.http.clone())
    }

    pub fn commands(&self) -> CommandsHandle {
        CommandsHandle::new(self.http.clone())
    }

    pub fn employees(&self) -> EmployeesHandle {
        EmployeesHandle::new(self.http.clone())
    }

    pub fn webhook(&self) -> WebhookParser {
        WebhookParser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_does_not_touch_network() {
        let config = ClientConfig::new("login").with_base_url("http://127.0.0.1:1");
        let client = Client::new(config).unwrap();
        assert!(client.auth().is_stale().await);
        assert!(client.organization_ids().await.is_empty());
        assert!(client.last_raw_response().await.is_empty());
    }

    #[tokio::test]
    async fn test_supplied_token_is_fresh() {
        let config = ClientConfig::new("login")
            .with_base_url("http://127.0.0.1:1")
            .with_token("pre-supplied");
        let client = Client::new(config).unwrap();
        assert!(!client.auth().is_stale().await);
        let (token, _) = client.auth().snapshot().await;
        assert_eq!(token.as_deref(), Some("pre-supplied"));
    }

    #[tokio::test]
    async fn test_connect_fails_on_auth_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/1/access_token")
            .with_status(401)
            .with_body(r#"{"errorDescription":"Login is not authorized"}"#)
            .create_async()
            .await;

        let config = ClientConfig::new("bad-login").with_base_url(server.url());
        let err = Client::connect(config).await.err().unwrap();
        assert!(err.to_string().contains("Login is not authorized"));
    }
}
