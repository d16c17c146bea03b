use async_trait::async_trait;
use std::sync::Arc;

use super::require_organizations;
use crate::error::ApiResult;
use crate::http_client::IikoHttpClient;
use crate::models::common::{BaseResponse, OrganizationIdsRequest};
use crate::models::employees::{
    CouriersResponse, EmployeeInfoRequest, EmployeeInfoResponse, EmployeeTerminalsResponse,
    ShiftByCourierRequest, ShiftRequest,
};

/// Couriers and personal shifts.
///
/// Clock-in and clock-out are commands: the answer only carries a
/// correlation id to poll through the commands group.
#[async_trait]
pub trait EmployeesApi: Send + Sync {
    async fn couriers(&self, organization_ids: &[String]) -> ApiResult<CouriersResponse>;

    async fn info(&self, organization_id: &str, employee_id: &str)
        -> ApiResult<EmployeeInfoResponse>;

    async fn shift_clockin(
        &self,
        organization_id: &str,
        terminal_group_id: &str,
        employee_id: &str,
        role_id: Option<&str>,
    ) -> ApiResult<BaseResponse>;

    async fn shift_clockout(
        &self,
        organization_id: &str,
        terminal_group_id: &str,
        employee_id: &str,
    ) -> ApiResult<BaseResponse>;

    async fn shift_is_open(
        &self,
        organization_id: &str,
        terminal_group_id: &str,
        employee_id: &str,
    ) -> ApiResult<EmployeeInfoResponse>;

    /// Terminal groups where the courier has an open shift
    async fn shift_by_courier(&self, employee_id: &str) -> ApiResult<EmployeeTerminalsResponse>;
}

#[derive(Clone)]
pub struct EmployeesHandle {
    http: Arc<IikoHttpClient>,
}

impl EmployeesHandle {
    pub(crate) fn new(http: Arc<IikoHttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl EmployeesApi for EmployeesHandle {
    async fn couriers(&self, organization_ids: &[String]) -> ApiResult<CouriersResponse> {
        if let Some(rejected) = require_organizations(organization_ids) {
            return rejected;
        }
        self.http
            .call(
                "/api/1/employees/couriers",
                &OrganizationIdsRequest { organization_ids },
            )
            .await
    }

    async fn info(
        &self,
        organization_id: &str,
        employee_id: &str,
    ) -> ApiResult<EmployeeInfoResponse> {
        let request = EmployeeInfoRequest {
            organization_id,
            id: employee_id,
        };
        self.http.call("/api/1/employees/info", &request).await
    }

    async fn shift_clockin(
        &self,
        organization_id: &str,
        terminal_group_id: &str,
        employee_id: &str,
        role_id: Option<&str>,
    ) -> ApiResult<BaseResponse> {
        let request = ShiftRequest {
            organization_id,
            terminal_group_id,
            employee_id,
            role_id,
        };
        self.http
            .call("/api/1/employees/shift/clockin", &request)
            .await
    }

    async fn shift_clockout(
        &self,
        organization_id: &str,
        terminal_group_id: &str,
        employee_id: &str,
    ) -> ApiResult<BaseResponse> {
        let request = ShiftRequest {
            organization_id,
            terminal_group_id,
            employee_id,
            role_id: None,
        };
        self.http
            .call("/api/1/employees/shift/clockout", &request)
            .await
    }

    async fn shift_is_open(
        &self,
        organization_id: &str,
        terminal_group_id: &str,
        employee_id: &str,
    ) -> ApiResult<EmployeeInfoResponse> {
        let request = ShiftRequest {
            organization_id,
            terminal_group_id,
            employee_id,
            role_id: None,
        };
        self.http
            .call("/api/1/employees/shift/is_open", &request)
            .await
    }

    async fn shift_by_courier(&self, employee_id: &str) -> ApiResult<EmployeeTerminalsResponse> {
        self.http
            .call(
                "/api/1/employees/shift/by_courier",
                &ShiftByCourierRequest { employee_id },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::client_with_token;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_couriers_requires_organizations() {
        let mut server = mockito::Server::new_async().await;
        let any = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let api = EmployeesHandle::new(client_with_token(&server.url()));
        let err = api.couriers(&[]).await.unwrap().unwrap_err();
        assert_eq!(err.description, "empty organization id list");
        any.assert_async().await;
    }

    #[tokio::test]
    async fn test_clockin_with_role() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/employees/shift/clockin")
            .match_body(Matcher::Json(json!({
                "organizationId": "org",
                "terminalGroupId": "tg",
                "employeeId": "e1",
                "roleId": "courier"
            })))
            .with_status(200)
            .with_body(r#"{"correlationId":"cmd"}"#)
            .create_async()
            .await;

        let api = EmployeesHandle::new(client_with_token(&server.url()));
        let response = api
            .shift_clockin("org", "tg", "e1", Some("courier"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.correlation_id.as_deref(), Some("cmd"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_shift_by_courier_sends_employee_only() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/1/employees/shift/by_courier")
            .match_body(Matcher::Json(json!({"employeeId": "e1"})))
            .with_status(200)
            .with_body(r#"{"employeeId":"e1","terminals":[{"terminalGroupId":"tg","isOpen":true}]}"#)
            .create_async()
            .await;

        let api = EmployeesHandle::new(client_with_token(&server.url()));
        let response = api.shift_by_courier("e1").await.unwrap().unwrap();
        assert!(response.terminals[0].is_open);
        mock.assert_async().await;
    }
}
