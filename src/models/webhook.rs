// Inbound webhook payloads pushed by iiko Cloud

use serde::{Deserialize, Serialize};

use super::common::ErrorInfo;
use super::orders::DeliveryOrder;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalData {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_manual_conditions: Vec<String>,
}

/// Delivery order as carried by webhook events: the regular order plus
/// fields that only appear in pushed events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDeliveryOrder {
    #[serde(flatten)]
    pub order: DeliveryOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_cooking_completed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_to_delivery_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_to_terminal_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_to_organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_asap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when_packed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_info: Option<LoyaltyInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_data: Vec<ExternalData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_number: Option<String>,
    pub organization_id: String,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub creation_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_info: Option<ErrorInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<WebhookDeliveryOrder>,
}

/// One element of a `DeliveryOrderUpdate` / `DeliveryOrderError` webhook batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDeliveryOrderEvent {
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    pub organization_id: String,
    pub correlation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_info: Option<EventInfo>,
}
