// Integration tests for the iiko client
//
// These tests drive the public Client against a mock iiko server, covering
// token acquisition, the 401 retry, error classification and the domain
// groups end to end.

use mockito::{Matcher, Server};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

use async_trait::async_trait;
use iiko_client::api::{
    CommandsApi, CustomersApi, DictionariesApi, EmployeesApi, TerminalGroupsApi,
};
use iiko_client::models::commands::CommandStatus;
use iiko_client::models::customers::CustomerIdentifier;
use iiko_client::models::OrganizationsRequest;
use iiko_client::{ApiResult, Client, ClientConfig, DomainError, Error};

// ==================================================================================================
// Test Helpers
// ==================================================================================================

const AUTH_PATH: &str = "/api/1/access_token";
const ORGANIZATIONS_PATH: &str = "/api/1/organizations";

/// Client pointed at the mock server, holding `token` when given
fn client_for(server: &Server, token: Option<&str>) -> Client {
    let mut config = ClientConfig::new("test-login").with_base_url(server.url());
    if let Some(token) = token {
        config = config.with_token(token);
    }
    assert_ok!(Client::new(config))
}

// ==================================================================================================
// Token lifecycle
// ==================================================================================================

#[tokio::test]
async fn test_first_call_acquires_token() {
    let mut server = Server::new_async().await;
    let auth = server
        .mock("POST", AUTH_PATH)
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"apiLogin": "test-login"})))
        .with_status(200)
        .with_body(r#"{"correlationId":"c","token":"issued-token"}"#)
        .expect(1)
        .create_async()
        .await;
    let organizations = server
        .mock("POST", ORGANIZATIONS_PATH)
        .match_header("authorization", "Bearer issued-token")
        .with_status(200)
        .with_body(r#"{"organizations":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let request = OrganizationsRequest::default();
    assert!(client.organizations(&request).await.unwrap().is_ok());
    // Second call reuses the token
    assert!(client.organizations(&request).await.unwrap().is_ok());

    auth.assert_async().await;
    organizations.assert_async().await;
}

#[tokio::test]
async fn test_supplied_token_skips_acquisition() {
    let mut server = Server::new_async().await;
    let auth = server
        .mock("POST", AUTH_PATH)
        .expect(0)
        .create_async()
        .await;
    let organizations = server
        .mock("POST", ORGANIZATIONS_PATH)
        .match_header("authorization", "Bearer supplied")
        .with_status(200)
        .with_body(r#"{"organizations":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, Some("supplied"));
    assert!(client
        .organizations(&OrganizationsRequest::default())
        .await
        .unwrap()
        .is_ok());

    auth.assert_async().await;
    organizations.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_is_refreshed_and_retried_once() {
    let mut server = Server::new_async().await;
    let rejected = server
        .mock("POST", "/api/1/employees/couriers")
        .match_header("authorization", "Bearer revoked")
        .with_status(401)
        .with_body(r#"{"errorDescription":"Unauthorized"}"#)
        .expect(1)
        .create_async()
        .await;
    let auth = server
        .mock("POST", AUTH_PATH)
        .with_status(200)
        .with_body(r#"{"token":"renewed"}"#)
        .expect(1)
        .create_async()
        .await;
    let accepted = server
        .mock("POST", "/api/1/employees/couriers")
        .match_header("authorization", "Bearer renewed")
        .with_status(200)
        .with_body(r#"{"employees":[{"organizationId":"org","items":[{"id":"c1","displayName":"Anna","isDeleted":false}]}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, Some("revoked"));
    let couriers = client
        .employees()
        .couriers(&["org".to_string()])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(couriers.employees[0].active().count(), 1);

    rejected.assert_async().await;
    auth.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_failed_acquisition_is_an_auth_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", AUTH_PATH)
        .with_status(200)
        .with_body(r#"{"token":""}"#)
        .create_async()
        .await;
    let organizations = server
        .mock("POST", ORGANIZATIONS_PATH)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let err = assert_err!(client.organizations(&OrganizationsRequest::default()).await);
    assert!(matches!(err, Error::Auth(ref d) if d == "empty token"));
    organizations.assert_async().await;
}

// ==================================================================================================
// Error classification
// ==================================================================================================

#[tokio::test]
async fn test_error_description_with_success_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", ORGANIZATIONS_PATH)
        .with_status(200)
        .with_body(r#"{"correlationId":"corr-9","errorDescription":"X"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let err = client
        .organizations(&OrganizationsRequest::default())
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.description, "X");
    assert_eq!(err.status, Some(200));
    assert_eq!(err.correlation_id.as_deref(), Some("corr-9"));
    assert!(err.raw.is_none());
    assert!(client.organization_ids().await.is_empty());
}

#[tokio::test]
async fn test_return_raw_keeps_body_text() {
    let mut server = Server::new_async().await;
    let body = r#"{"errorDescription":"Organization not found"}"#;
    server
        .mock("POST", "/api/1/terminal_groups")
        .with_status(400)
        .with_body(body)
        .create_async()
        .await;

    let config = ClientConfig::new("test-login")
        .with_base_url(server.url())
        .with_token("t")
        .with_return_raw(true);
    let client = Client::new(config).unwrap();
    let err = client
        .terminal_groups()
        .terminal_groups(&["org".to_string()], true)
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.status, Some(400));
    assert_eq!(err.raw.as_deref(), Some(body));
}

#[tokio::test]
async fn test_shape_mismatch_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", ORGANIZATIONS_PATH)
        .with_status(200)
        .with_body(r#"{"organizations":"not a list"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let err = assert_err!(client.organizations(&OrganizationsRequest::default()).await);
    assert!(matches!(err, Error::Decode { ref path, .. } if path == ORGANIZATIONS_PATH));
    // The body is still available for inspection
    assert_eq!(
        &client.last_raw_response().await[..],
        br#"{"organizations":"not a list"}"#
    );
}

#[tokio::test]
async fn test_empty_organization_list_never_hits_network() {
    let mut server = Server::new_async().await;
    let any = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let err = client
        .dictionaries()
        .discounts(&[])
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.description, "empty organization id list");
    assert_eq!(err.status, None);
    any.assert_async().await;
}

// ==================================================================================================
// Domain groups
// ==================================================================================================

#[tokio::test]
async fn test_organizations_are_remembered() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ORGANIZATIONS_PATH)
        .match_body(Matcher::Json(json!({
            "organizationIds": ["A", "B"],
            "returnAdditionalInfo": true
        })))
        .with_status(200)
        .with_body(r#"{"organizations":[{"id":"A","name":"X"},{"id":"B","name":"Y"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let request = OrganizationsRequest::default()
        .with_organization_ids(vec!["A".to_string(), "B".to_string()])
        .with_additional_info(true);
    let response = client.organizations(&request).await.unwrap().unwrap();

    assert_eq!(response.organizations[0].name, "X");
    assert_eq!(client.organization_ids().await, vec!["A", "B"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_customer_lookup_by_phone() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/1/loyalty/iiko/customer/info")
        .match_body(Matcher::Json(json!({
            "organizationId": "org",
            "type": "phone",
            "phone": "+79990000000"
        })))
        .with_status(200)
        .with_body(r#"{"id":"cust","cards":[{"id":"card","track":"T","number":"N"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let identifier = CustomerIdentifier::Phone("+79990000000".to_string());
    let info = client
        .customers()
        .info("org", &identifier)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(info.cards[0].track, "T");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_untyped_call_value() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/1/marketing_sources")
        .match_body(Matcher::Json(json!({"organizationIds": ["org"]})))
        .with_status(200)
        .with_body(r#"{"marketingSources":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server, Some("t"));
    let value = client
        .http()
        .call_value(
            "/api/1/marketing_sources",
            &json!({"organizationIds": ["org"]}),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(value, json!({"marketingSources": []}));
}

#[test]
fn test_webhook_batch() {
    let client = Client::new(ClientConfig::new("test-login")).unwrap();
    let parser = client.webhook();

    let events = parser
        .parse_order_events(&[json!({
            "eventType": "DeliveryOrderError",
            "organizationId": "org",
            "correlationId": "corr",
            "eventInfo": {
                "id": "o1",
                "organizationId": "org",
                "timestamp": 1,
                "creationStatus": "Error",
                "errorInfo": {"code": "TimeoutError", "message": "no answer"}
            }
        })])
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].correlation_id, "corr");
    let info = events[0].event_info.as_ref().unwrap();
    assert_eq!(info.error_info.as_ref().unwrap().code, "TimeoutError");

    let malformed = parser.parse_order_events(&[
        json!({"eventType": "DeliveryOrderUpdate", "organizationId": "org", "correlationId": "a"}),
        json!("garbage"),
    ]);
    assert!(matches!(malformed, Err(Error::Decode { .. })));

    assert!(matches!(
        parser.parse_reserve_events(&[]),
        Err(Error::NotImplemented(_))
    ));
}

// ==================================================================================================
// Capability seams
// ==================================================================================================

/// Commands group that reports a fixed state without any server
struct FakeCommands {
    state: &'static str,
}

#[async_trait]
impl CommandsApi for FakeCommands {
    async fn status(&self, organization_id: &str, _correlation_id: &str) -> ApiResult<CommandStatus> {
        if organization_id.is_empty() {
            return Ok(Err(DomainError::precondition("empty organization id")));
        }
        Ok(Ok(CommandStatus {
            state: self.state.to_string(),
            exception: None,
        }))
    }
}

/// Caller that only needs the commands capability
async fn command_finished(commands: &dyn CommandsApi, correlation_id: &str) -> bool {
    matches!(
        commands.status("org", correlation_id).await,
        Ok(Ok(status)) if status.is_finished()
    )
}

#[tokio::test]
async fn test_groups_accept_substitutes() {
    assert!(command_finished(&FakeCommands { state: "Success" }, "c").await);
    assert!(!command_finished(&FakeCommands { state: "InProgress" }, "c").await);

    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/1/commands/status")
        .with_status(200)
        .with_body(r#"{"state":"Error","exception":{"message":"offline"}}"#)
        .create_async()
        .await;
    let client = client_for(&server, Some("t"));
    assert!(command_finished(&client.commands(), "c").await);
}
