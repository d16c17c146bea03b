use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::orders::{
    CreatedOrderResponse, OrderCreateRequest, OrdersByIdRequest, OrdersByIdResponse,
};

/// Table and quick-service orders
#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn create(&self, request: &OrderCreateRequest) -> ApiResult<CreatedOrderResponse>;

    async fn by_id(&self, request: &OrdersByIdRequest) -> ApiResult<OrdersByIdResponse>;
}

#[derive(Clone)]
pub struct OrdersHandle {
    http: Arc<IikoHttpClient>,
}

impl OrdersHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl OrdersApi for OrdersHandle {
    async fn create(&self, request: &OrderCreateRequest) -> ApiResult<CreatedOrderResponse> {
        self.http.call("/api/1/order/create", request).await
    }

    async fn by_id(&self, request: &OrdersByIdRequest) -> ApiResult<OrdersByIdResponse> {
        self.http.call("/api/1/order/by_id", request).await
    }
}
