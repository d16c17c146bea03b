use async_trait::async_trait;
use std::sync::Arc;

use super::require_organizations;
use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::address::{CitiesResponse, RegionsResponse, StreetsByCityRequest, StreetsResponse};
use crate::models::common::OrganizationIdsRequest;

#[async_trait]
pub trait AddressApi: Send + Sync {
    async fn regions(&self, organization_ids: &[String]) -> ApiResult<RegionsResponse>;

    async fn cities(&self, organization_ids: &[String]) -> ApiResult<CitiesResponse>;

    async fn streets_by_city(
        &self,
        organization_id: &str,
        city_id: &str,
    ) -> ApiResult<StreetsResponse>;
}

#[derive(Clone)]
pub struct AddressHandle {
    http: Arc<IikoHttpClient>,
}

impl AddressHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AddressApi for AddressHandle {
    async fn regions(&self, organization_ids: &[String]) -> ApiResult<RegionsResponse> {
        if let Some(rejected) = require_organizations(organization_ids) {
            return rejected;
        }
        self.http
            .call("/api/1/regions", &OrganizationIdsRequest { organization_ids })
            .await
    }

    async fn cities(&self, organization_ids: &[String]) -> ApiResult<CitiesResponse> {
        if let Some(rejected) = require_organizations(organization_ids) {
            return rejected;
        }
        self.http
            .call("/api/1/cities", &OrganizationIdsRequest { organization_ids })
            .await
    }

    async fn streets_by_city(
        &self,
        organization_id: &str,
        city_id: &str,
    ) -> ApiResult<StreetsResponse> {
        let request = StreetsByCityRequest {
            organization_id,
            city_id,
        };
        self.http.call("/api/1/streets/by_city", &request).await
    }
}
