use async_trait::async_trait;
use std::sync::Arc;

use super::require_organizations;
use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::common::{EmptyRequest, OrganizationIdsRequest};
use crate::models::dictionaries::{
    CancelCausesResponse, DiscountsResponse, OrderTypesResponse, PaymentTypesResponse,
    RemovalTypesResponse, TipsTypesResponse,
};

/// Reference data: order types, payment types, discounts and the like
#[async_trait]
pub trait DictionariesApi: Send + Sync {
    async fn order_types(&self, organization_ids: &[String]) -> ApiResult<OrderTypesResponse>;

    async fn payment_types(&self, organization_ids: &[String])
        -> ApiResult<PaymentTypesResponse>;

    async fn discounts(&self, organization_ids: &[String]) -> ApiResult<DiscountsResponse>;

    async fn cancel_causes(&self, organization_ids: &[String])
        -> ApiResult<CancelCausesResponse>;

    async fn removal_types(&self, organization_ids: &[String])
        -> ApiResult<RemovalTypesResponse>;

    /// Tips types are not scoped by organization
    async fn tips_types(&self) -> ApiResult<TipsTypesResponse>;
}

#[derive(Clone)]
pub struct DictionariesHandle {
    http: Arc<IikoHttpClient>,
}

impl DictionariesHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }

    async fn by_organizations<T>(&self, path: &str, organization_ids: &[String]) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if let Some(rejected) = require_organizations(organization_ids) {
            return rejected;
        }
        self.http
            .call(path, &OrganizationIdsRequest { organization_ids })
            .await
    }
}

#[async_trait]
impl DictionariesApi for DictionariesHandle {
    async fn order_types(&self, organization_ids: &[String]) -> ApiResult<OrderTypesResponse> {
        self.by_organizations("/api/1/deliveries/order_types", organization_ids)
            .await
    }

    async fn payment_types(
        &self,
        organization_ids: &[String],
    ) -> ApiResult<PaymentTypesResponse> {
        self.by_organizations("/api/1/payment_types", organization_ids)
            .await
    }

    async fn discounts(&self, organization_ids: &[String]) -> ApiResult<DiscountsResponse> {
        self.by_organizations("/api/1/discounts", organization_ids)
            .await
    }

    async fn cancel_causes(
        &self,
        organization_ids: &[String],
    ) -> ApiResult<CancelCausesResponse> {
        self.by_organizations("/api/1/cancel_causes", organization_ids)
            .await
    }

    async fn removal_types(
        &self,
        organization_ids: &[String],
    ) -> ApiResult<RemovalTypesResponse> {
        self.by_organizations("/api/1/removal_types", organization_ids)
            .await
    }

    async fn tips_types(&self) -> ApiResult<TipsTypesResponse> {
        self.http.call("/api/1/tips_types", &EmptyRequest {}).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_with_token;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_organizations_rejected_locally() {
        let mut server = mockito::Server::new_async().await;
        let any = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let api = DictionariesHandle::new(client_with_token(&server.url()));
        let err = api.payment_types(&[]).await.unwrap().unwrap_err();
        assert_eq!(err.description, "empty organization id list");
        assert_eq!(err.status, None);
        let err = api.removal_types(&[]).await.unwrap().unwrap_err();
        assert_eq!(err.description, "empty organization id list");

        any.assert_async().await;
    }

    #[tokio::test]
    async fn test_order_types_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/deliveries/order_types")
            .match_body(Matcher::Json(json!({"organizationIds": ["org"]})))
            .with_status(200)
            .with_body(
                r#"{"correlationId":"c","orderTypes":[{"organizationId":"org","items":[]}]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let api = DictionariesHandle::new(client_with_token(&server.url()));
        let response = api
            .order_types(&["org".to_string()])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.order_types.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_tips_types_sends_empty_object() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/tips_types")
            .match_body(Matcher::Json(json!({})))
            .with_status(200)
            .with_body(r#"{"tipsTypes":[]}"#)
            .create_async()
            .await;

        let api = DictionariesHandle::new(client_with_token(&server.url()));
        let response = api.tips_types().await.unwrap().unwrap();
        assert!(response.tips_types.is_empty());
        mock.assert_async().await;
    }
}
