use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::commands::NotificationRequest;
use crate::models::common::BaseResponse;

#[async_trait]
pub trait NotificationsApi: Send + Sync {
    /// Push a notification to the POS about an order
    async fn send(&self, request: &NotificationRequest) -> ApiResult<BaseResponse>;
}

#[derive(Clone)]
pub struct NotificationsHandle {
    http: Arc<IikoHttpClient>,
}

impl NotificationsHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl NotificationsApi for NotificationsHandle {
    async fn send(&self, request: &NotificationRequest) -> ApiResult<BaseResponse> {
        self.http.call("/api/1/notifications/send", request).await
    }
}
