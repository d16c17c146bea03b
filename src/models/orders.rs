use serde::{Deserialize, Serialize};

use super::common::{ErrorInfo, IdName};

// ==================================================================================================
// Request Models
// ==================================================================================================

/// `createOrderSettings` object accepted by order and delivery creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderSettings {
    /// Seconds to wait for the order to reach the POS terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_to_front_timeout: Option<u32>,
}

/// Body of POST /api/1/order/create
///
/// The order itself is passed through untouched; its schema is owned by iiko.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub organization_id: String,
    pub terminal_group_id: String,
    pub order: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_order_settings: Option<CreateOrderSettings>,
}

/// Body of POST /api/1/order/by_id
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersByIdRequest {
    pub organization_ids: Vec<String>,
    pub order_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pos_order_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub return_external_data_keys: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_keys: Vec<String>,
}

/// Body of POST /api/1/deliveries/create
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCreateRequest {
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_group_id: Option<String>,
    pub order: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_order_settings: Option<CreateOrderSettings>,
}

/// Delivery status accepted by update_order_delivery_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Waiting,
    OnWay,
    Delivered,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateDeliveryStatusRequest<'a> {
    pub organization_ids: &'a [String],
    pub order_id: &'a str,
    pub delivery_status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeliveryOrderRequest<'a> {
    pub organization_ids: &'a [String],
    pub order_id: &'a str,
}

/// Body of POST /api/1/deliveries/by_delivery_date_and_status
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveriesByDateRequest {
    pub organization_ids: Vec<String>,
    /// `yyyy-MM-dd HH:mm:ss.fff`
    pub delivery_date_from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date_to: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_keys: Vec<String>,
}

// ==================================================================================================
// Order Parts
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub in_blacklist: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklist_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelInfo {
    pub when_cancelled: String,
    pub cause: IdName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEmployee {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourierInfo {
    pub courier: OrderEmployee,
    #[serde(default)]
    pub is_courier_selected_manually: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub has_problem: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conception {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestsInfo {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub split_between_persons: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub source_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentKind {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_type: PaymentKind,
    pub sum: f64,
    #[serde(default)]
    pub is_preliminary: bool,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub is_processed_externally: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fiscalized_externally: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub tips_type: IdName,
    pub payment_type: PaymentKind,
    pub sum: f64,
    #[serde(default)]
    pub is_preliminary: bool,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub is_processed_externally: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fiscalized_externally: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscount {
    pub discount_type: IdName,
    pub sum: f64,
    #[serde(default)]
    pub selective_positions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionMethod {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removal_type: Option<IdName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDeleted {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_method: Option<DeletionMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTypeRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order_service_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboInformation {
    pub combo_id: String,
    pub combo_source_id: String,
    pub group_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product: IdName,
    #[serde(default)]
    pub modifiers: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub price_predefined: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_percent: Option<f64>,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<ItemDeleted>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_printed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo_information: Option<ComboInformation>,
}

// ==================================================================================================
// Delivery Order
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_delivery_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<OrderCustomer>,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_point: Option<serde_json::Value>,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_info: Option<CancelInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier_info: Option<CourierInfo>,
    #[serde(default)]
    pub complete_before: String,
    #[serde(default)]
    pub when_created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_confirmed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_printed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_sended: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_delivered: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<Problem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<OrderEmployee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_source: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_in_courier_route: Option<i64>,
    #[serde(default)]
    pub cooking_start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_received_by_api: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_received_from_front: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_from_delivery_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_from_terminal_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_from_organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_courier_service: Option<IdName>,
    #[serde(default)]
    pub sum: f64,
    #[serde(default)]
    pub number: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_bill_printed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_closed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conception: Option<Conception>,
    #[serde(default)]
    pub guests_info: GuestsInfo,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub combos: Vec<ComboItem>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(default)]
    pub discounts: Vec<AppliedDiscount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderTypeRef>,
    #[serde(default)]
    pub terminal_group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_payments_sum: Option<f64>,
}

// ==================================================================================================
// Response Models
// ==================================================================================================

/// Order with its creation state, as returned by create and lookup calls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_number: Option<String>,
    pub organization_id: String,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_info: Option<ErrorInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<DeliveryOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub order_info: OrderInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedDeliveryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_info: Option<OrderInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersByIdResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub orders: Vec<OrderInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersByOrganization {
    pub organization_id: String,
    #[serde(default)]
    pub orders: Vec<OrderInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveriesByDateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub max_revision: i64,
    #[serde(default)]
    pub orders_by_organizations: Vec<OrdersByOrganization>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delivery_status_wire_names() {
        assert_eq!(serde_json::to_value(DeliveryStatus::OnWay).unwrap(), json!("OnWay"));
        assert_eq!(
            serde_json::to_value(DeliveryStatus::Delivered).unwrap(),
            json!("Delivered")
        );
    }

    #[test]
    fn test_orders_by_id_request_omits_empty_lists() {
        let request = OrdersByIdRequest {
            organization_ids: vec!["org".to_string()],
            order_ids: vec!["o-1".to_string()],
            source_keys: vec!["site".to_string()],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"organizationIds": ["org"], "orderIds": ["o-1"], "sourceKeys": ["site"]})
        );
    }

    #[test]
    fn test_order_info_with_error() {
        let info: OrderInfo = serde_json::from_value(json!({
            "id": "o-1",
            "organizationId": "org",
            "timestamp": 1700000000,
            "creationStatus": "Error",
            "errorInfo": {"code": "TerminalGroupDisabled", "message": "disabled"}
        }))
        .unwrap();

        assert_eq!(info.creation_status.as_deref(), Some("Error"));
        assert_eq!(info.error_info.unwrap().code, "TerminalGroupDisabled");
        assert!(info.order.is_none());
    }
}
