use async_trait::async_trait;
use std::sync::Arc;

use super::require_organizations;
use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::terminal_groups::{
    IsAliveRequest, IsAliveResponse, TerminalGroupsRequest, TerminalGroupsResponse,
};

#[async_trait]
pub trait TerminalGroupsApi: Send + Sync {
    async fn terminal_groups(
        &self,
        organization_ids: &[String],
        include_disabled: bool,
    ) -> ApiResult<TerminalGroupsResponse>;

    /// Whether the POS terminals of the given groups are reachable
    async fn is_alive(
        &self,
        organization_ids: &[String],
        terminal_group_ids: &[String],
    ) -> ApiResult<IsAliveResponse>;
}

#[derive(Clone)]
pub struct TerminalGroupsHandle {
    http: Arc<IikoHttpClient>,
}

impl TerminalGroupsHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TerminalGroupsApi for TerminalGroupsHandle {
    async fn terminal_groups(
        &self,
        organization_ids: &[String],
        include_disabled: bool,
    ) -> ApiResult<TerminalGroupsResponse> {
        if let Some(rejected) = require_organizations(organization_ids) {
            return rejected;
        }
        let request = TerminalGroupsRequest {
            organization_ids,
            include_disabled,
        };
        self.http.call("/api/1/terminal_groups", &request).await
    }

    async fn is_alive(
        &self,
        organization_ids: &[String],
        terminal_group_ids: &[String],
    ) -> ApiResult<IsAliveResponse> {
        if let Some(rejected) = require_organizations(organization_ids) {
            return rejected;
        }
        let request = IsAliveRequest {
            organization_ids,
            terminal_group_ids,
        };
        self.http
            .call("/api/1/terminal_groups/is_alive", &request)
            .await
    }
}
