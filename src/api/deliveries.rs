use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::common::BaseResponse;
use crate::models::orders::{
    CreatedDeliveryResponse, DeliveriesByDateRequest, DeliveriesByDateResponse,
    DeliveryCreateRequest, DeliveryOrderRequest, DeliveryStatus, UpdateDeliveryStatusRequest,
};

#[async_trait]
pub trait DeliveriesApi: Send + Sync {
    async fn create(&self, request: &DeliveryCreateRequest) -> ApiResult<CreatedDeliveryResponse>;

    /// `delivery_date` is only sent together with [`DeliveryStatus::Delivered`]
    async fn update_order_delivery_status(
        &self,
        organization_ids: &[String],
        order_id: &str,
        status: DeliveryStatus,
        delivery_date: Option<&str>,
    ) -> ApiResult<BaseResponse>;

    async fn confirm(&self, organization_ids: &[String], order_id: &str)
        -> ApiResult<BaseResponse>;

    async fn cancel_confirmation(
        &self,
        organization_ids: &[String],
        order_id: &str,
    ) -> ApiResult<BaseResponse>;

    async fn by_delivery_date_and_status(
        &self,
        request: &DeliveriesByDateRequest,
    ) -> ApiResult<DeliveriesByDateResponse>;
}

#[derive(Clone)]
pub struct DeliveriesHandle {
    http: Arc<IikoHttpClient>,
}

impl DeliveriesHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DeliveriesApi for DeliveriesHandle {
    async fn create(&self, request: &DeliveryCreateRequest) -> ApiResult<CreatedDeliveryResponse> {
        self.http.call("/api/1/deliveries/create", request).await
    }

    async fn update_order_delivery_status(
        &self,
        organization_ids: &[String],
        order_id: &str,
        status: DeliveryStatus,
        delivery_date: Option<&str>,
    ) -> ApiResult<BaseResponse> {
        let request = UpdateDeliveryStatusRequest {
            organization_ids,
            order_id,
            delivery_status: status,
            delivery_date: delivery_date
                .filter(|d| status == DeliveryStatus::Delivered && !d.is_empty()),
        };
        self.http
            .call("/api/1/deliveries/update_order_delivery_status", &request)
            .await
    }

    async fn confirm(
        &self,
        organization_ids: &[String],
        order_id: &str,
    ) -> ApiResult<BaseResponse> {
        let request = DeliveryOrderRequest {
            organization_ids,
            order_id,
        };
        self.http.call("/api/1/deliveries/confirm", &request).await
    }

    async fn cancel_confirmation(
        &self,
        organization_ids: &[String],
        order_id: &str,
    ) -> ApiResult<BaseResponse> {
        let request = DeliveryOrderRequest {
            organization_ids,
            order_id,
        };
        self.http
            .call("/api/1/deliveries/cancel_confirmation", &request)
            .await
    }

    async fn by_delivery_date_and_status(
        &self,
        request: &DeliveriesByDateRequest,
    ) -> ApiResult<DeliveriesByDateResponse> {
        self.http
            .call("/api/1/deliveries/by_delivery_date_and_status", request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_with_token;
    use mockito::Matcher;
    use serde_json::json;

    const STATUS_PATH: &str = "/api/1/deliveries/update_order_delivery_status";

    #[tokio::test]
    async fn test_delivery_date_dropped_unless_delivered() {
        let mut server = mockito::Server::new_async().await;
        let on_way = server
            .mock("POST", STATUS_PATH)
            .match_body(Matcher::Json(json!({
                "organizationIds": ["org"],
                "orderId": "o1",
                "deliveryStatus": "OnWay"
            })))
            .with_status(200)
            .with_body(r#"{"correlationId":"c1"}"#)
            .expect(1)
            .create_async()
            .await;
        let delivered = server
            .mock("POST", STATUS_PATH)
            .match_body(Matcher::Json(json!({
                "organizationIds": ["org"],
                "orderId": "o1",
                "deliveryStatus": "Delivered",
                "deliveryDate": "2024-05-01 12:00:00.000"
            })))
            .with_status(200)
            .with_body(r#"{"correlationId":"c2"}"#)
            .expect(1)
            .create_async()
            .await;

        let api = DeliveriesHandle::new(client_with_token(&server.url()));
        let orgs = vec!["org".to_string()];

        let response = api
            .update_order_delivery_status(
                &orgs,
                "o1",
                DeliveryStatus::OnWay,
                Some("2024-05-01 12:00:00.000"),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.correlation_id.as_deref(), Some("c1"));

        let response = api
            .update_order_delivery_status(
                &orgs,
                "o1",
                DeliveryStatus::Delivered,
                Some("2024-05-01 12:00:00.000"),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.correlation_id.as_deref(), Some("c2"));

        on_way.assert_async().await;
        delivered.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_delivery_date_omitted() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", STATUS_PATH)
            .match_body(Matcher::Json(json!({
                "organizationIds": ["org"],
                "orderId": "o1",
                "deliveryStatus": "Delivered"
            })))
            .with_status(200)
            .with_body(r#"{"correlationId":"c3"}"#)
            .expect(1)
            .create_async()
            .await;

        let api = DeliveriesHandle::new(client_with_token(&server.url()));
        let orgs = vec!["org".to_string()];

        let response = api
            .update_order_delivery_status(&orgs, "o1", DeliveryStatus::Delivered, Some(""))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.correlation_id.as_deref(), Some("c3"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_confirm_and_cancel_confirmation() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({"organizationIds": ["org"], "orderId": "o1"});
        let confirm = server
            .mock("POST", "/api/1/deliveries/confirm")
            .match_body(Matcher::Json(body.clone()))
            .with_status(200)
            .with_body(r#"{"correlationId":"c"}"#)
            .create_async()
            .await;
        let cancel = server
            .mock("POST", "/api/1/deliveries/cancel_confirmation")
            .match_body(Matcher::Json(body))
            .with_status(200)
            .with_body(r#"{"correlationId":"c"}"#)
            .create_async()
            .await;

        let api = DeliveriesHandle::new(client_with_token(&server.url()));
        let orgs = vec!["org".to_string()];
        assert!(api.confirm(&orgs, "o1").await.unwrap().is_ok());
        assert!(api.cancel_confirmation(&orgs, "o1").await.unwrap().is_ok());

        confirm.assert_async().await;
        cancel.assert_async().await;
    }
}
