use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::common::EmptyRequest;
use crate::models::menu::{
    MenuByIdRequest, MenuByIdResponse, MenuResponse, NomenclatureRequest, NomenclatureResponse,
};

#[async_trait]
pub trait MenuApi: Send + Sync {
    /// Full nomenclature of an organization. With `start_revision` the server
    /// may answer with only what changed after it.
    async fn nomenclature(
        &self,
        organization_id: &str,
        start_revision: Option<i64>,
    ) -> ApiResult<NomenclatureResponse>;

    /// External menus and price categories available to the API login
    async fn menu(&self) -> ApiResult<MenuResponse>;

    async fn menu_by_id(&self, request: &MenuByIdRequest) -> ApiResult<MenuByIdResponse>;
}

#[derive(Clone)]
pub struct MenuHandle {
    http: Arc<IikoHttpClient>,
}

impl MenuHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MenuApi for MenuHandle {
    async fn nomenclature(
        &self,
        organization_id: &str,
        start_revision: Option<i64>,
    ) -> ApiResult<NomenclatureResponse> {
        let request = NomenclatureRequest {
            organization_id,
            start_revision,
        };
        self.http.call("/api/1/nomenclature", &request).await
    }

    async fn menu(&self) -> ApiResult<MenuResponse> {
        self.http.call("/api/2/menu", &EmptyRequest {}).await
    }

    async fn menu_by_id(&self, request: &MenuByIdRequest) -> ApiResult<MenuByIdResponse> {
        self.http.call("/api/2/menu/by_id", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_with_token;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_nomenclature_with_revision() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/nomenclature")
            .match_body(Matcher::Json(
                json!({"organizationId": "org", "startRevision": 42}),
            ))
            .with_status(200)
            .with_body(r#"{"correlationId":"c","groups":[],"productCategories":[],"products":[],"sizes":[],"revision":43}"#)
            .create_async()
            .await;

        let api = MenuHandle::new(client_with_token(&server.url()));
        let response = api.nomenclature("org", Some(42)).await.unwrap().unwrap();
        assert_eq!(response.revision, 43);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_menu_by_id_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/2/menu/by_id")
            .match_body(Matcher::Json(json!({
                "externalMenuId": "m1",
                "organizationIds": ["org"],
                "priceCategoryId": "pc"
            })))
            .with_status(200)
            .with_body(r#"{"id":"m1","name":"Main","itemCategories":[]}"#)
            .create_async()
            .await;

        let api = MenuHandle::new(client_with_token(&server.url()));
        let request = MenuByIdRequest::new("m1", vec!["org".to_string()]).with_price_category("pc");
        let response = api.menu_by_id(&request).await.unwrap().unwrap();
        assert_eq!(response.name, "Main");
        mock.assert_async().await;
    }
}
