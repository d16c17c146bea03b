use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::commands::{CommandStatus, CommandStatusRequest};

#[async_trait]
pub trait CommandsApi: Send + Sync {
    /// Progress of a command started earlier, keyed by the correlation id
    /// that command returned
    async fn status(&self, organization_id: &str, correlation_id: &str)
        -> ApiResult<CommandStatus>;
}

#[derive(Clone)]
pub struct CommandsHandle {
    http: Arc<IikoHttpClient>,
}

impl CommandsHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandsApi for CommandsHandle {
    async fn status(
        &self,
        organization_id: &str,
        correlation_id: &str,
    ) -> ApiResult<CommandStatus> {
        let request = CommandStatusRequest {
            organization_id,
            correlation_id,
        };
        self.http.call("/api/1/commands/status", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_with_token;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_status_in_progress() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/commands/status")
            .match_body(Matcher::Json(
                json!({"organizationId": "org", "correlationId": "corr"}),
            ))
            .with_status(200)
            .with_body(r#"{"state":"InProgress"}"#)
            .create_async()
            .await;

        let api = CommandsHandle::new(client_with_token(&server.url()));
        let status = api.status("org", "corr").await.unwrap().unwrap();
        assert_eq!(status.state, "InProgress");
        assert!(status.exception.is_none());
        mock.assert_async().await;
    }
}
