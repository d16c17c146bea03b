use async_trait::async_trait;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::common::BaseResponse;
use crate::models::customers::{
    CancelHoldRequest, CardRequest, CustomerIdResponse, CustomerIdentifier, CustomerInfo,
    CustomerInfoRequest, CustomerUpsert, CustomerUpsertRequest, ProgramAddRequest,
    ProgramAddResponse, WalletHoldResponse, WalletOperation, WalletRequest,
};

const BASE: &str = "/api/1/loyalty/iiko/customer";

/// iikoCard loyalty: customers, cards, programs and wallets
#[async_trait]
pub trait CustomersApi: Send + Sync {
    async fn info(
        &self,
        organization_id: &str,
        identifier: &CustomerIdentifier,
    ) -> ApiResult<CustomerInfo>;

    async fn create_or_update(
        &self,
        organization_id: &str,
        customer: &CustomerUpsert,
    ) -> ApiResult<CustomerIdResponse>;

    async fn program_add(
        &self,
        organization_id: &str,
        customer_id: &str,
        program_id: &str,
    ) -> ApiResult<ProgramAddResponse>;

    async fn card_add(
        &self,
        organization_id: &str,
        customer_id: &str,
        card_track: &str,
        card_number: &str,
    ) -> ApiResult<BaseResponse>;

    async fn card_remove(
        &self,
        organization_id: &str,
        customer_id: &str,
        card_track: &str,
    ) -> ApiResult<BaseResponse>;

    /// Reserve funds. Pass `transaction_id` to make the hold idempotent.
    async fn wallet_hold(
        &self,
        organization_id: &str,
        operation: &WalletOperation,
        transaction_id: Option<&str>,
    ) -> ApiResult<WalletHoldResponse>;

    async fn wallet_cancel_hold(
        &self,
        organization_id: &str,
        transaction_id: &str,
    ) -> ApiResult<BaseResponse>;

    async fn wallet_topup(
        &self,
        organization_id: &str,
        operation: &WalletOperation,
    ) -> ApiResult<BaseResponse>;

    async fn wallet_chargeoff(
        &self,
        organization_id: &str,
        operation: &WalletOperation,
    ) -> ApiResult<BaseResponse>;
}

#[derive(Clone)]
pub struct CustomersHandle {
    http: Arc<IikoHttpClient>,
}

impl CustomersHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }

    async fn wallet<T>(
        &self,
        action: &str,
        organization_id: &str,
        operation: &WalletOperation,
        transaction_id: Option<&str>,
    ) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = WalletRequest {
            operation,
            transaction_id,
            organization_id,
        };
        self.http
            .call(&format!("{}/wallet/{}", BASE, action), &request)
            .await
    }
}

#[async_trait]
impl CustomersApi for CustomersHandle {
    async fn info(
        &self,
        organization_id: &str,
        identifier: &CustomerIdentifier,
    ) -> ApiResult<CustomerInfo> {
        let request = CustomerInfoRequest::new(organization_id, identifier);
        self.http.call(&format!("{}/info", BASE), &request).await
    }

    async fn create_or_update(
        &self,
        organization_id: &str,
        customer: &CustomerUpsert,
    ) -> ApiResult<CustomerIdResponse> {
        let request = CustomerUpsertRequest {
            organization_id,
            customer,
        };
        self.http
            .call(&format!("{}/create_or_update", BASE), &request)
            .await
    }

    async fn program_add(
        &self,
        organization_id: &str,
        customer_id: &str,
        program_id: &str,
    ) -> ApiResult<ProgramAddResponse> {
        let request = ProgramAddRequest {
            customer_id,
            program_id,
            organization_id,
        };
        self.http
            .call(&format!("{}/program/add", BASE), &request)
            .await
    }

    async fn card_add(
        &self,
        organization_id: &str,
        customer_id: &str,
        card_track: &str,
        card_number: &str,
    ) -> ApiResult<BaseResponse> {
        let request = CardRequest {
            customer_id,
            card_track,
            card_number: Some(card_number),
            organization_id,
        };
        self.http.call(&format!("{}/card/add", BASE), &request).await
    }

    async fn card_remove(
        &self,
        organization_id: &str,
        customer_id: &str,
        card_track: &str,
    ) -> ApiResult<BaseResponse> {
        let request = CardRequest {
            customer_id,
            card_track,
            card_number: None,
            organization_id,
        };
        self.http
            .call(&format!("{}/card/remove", BASE), &request)
            .await
    }

    async fn wallet_hold(
        &self,
        organization_id: &str,
        operation: &WalletOperation,
        transaction_id: Option<&str>,
    ) -> ApiResult<WalletHoldResponse> {
        self.wallet("hold", organization_id, operation, transaction_id)
            .await
    }

    async fn wallet_cancel_hold(
        &self,
        organization_id: &str,
        transaction_id: &str,
    ) -> ApiResult<BaseResponse> {
        let request = CancelHoldRequest {
            organization_id,
            transaction_id,
        };
        self.http
            .call(&format!("{}/wallet/cancel_hold", BASE), &request)
            .await
    }

    async fn wallet_topup(
        &self,
        organization_id: &str,
        operation: &WalletOperation,
    ) -> ApiResult<BaseResponse> {
        self.wallet("topup", organization_id, operation, None).await
    }

    async fn wallet_chargeoff(
        &self,
        organization_id: &str,
        operation: &WalletOperation,
    ) -> ApiResult<BaseResponse> {
        self.wallet("chargeoff", organization_id, operation, None)
            .await
    }
}
