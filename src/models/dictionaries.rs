use serde::{Deserialize, Serialize};

use super::common::IdName;

// ==================================================================================================
// Order Types
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderType {
    pub id: String,
    pub name: String,
    pub order_service_type: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_revision: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTypesByOrganization {
    pub organization_id: String,
    #[serde(default)]
    pub items: Vec<OrderType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTypesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub order_types: Vec<OrderTypesByOrganization>,
}

// ==================================================================================================
// Payment Types
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentType {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub combinable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_revision: Option<i64>,
    #[serde(default)]
    pub applicable_marketing_campaigns: Vec<String>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub print_cheque: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_processing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type_kind: Option<String>,
    #[serde(default)]
    pub terminal_groups: Vec<IdName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTypesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub payment_types: Vec<PaymentType>,
}

// ==================================================================================================
// Discounts
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryDiscount {
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub is_categorised_discount: bool,
    #[serde(default)]
    pub product_category_discounts: Vec<ProductCategoryDiscount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_be_applied_selectively: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_sum: Option<f64>,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub sum: f64,
    #[serde(default)]
    pub can_apply_by_card_number: bool,
    #[serde(default)]
    pub is_manual: bool,
    #[serde(default)]
    pub is_card: bool,
    #[serde(default)]
    pub is_automatic: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountsByOrganization {
    pub organization_id: String,
    #[serde(default)]
    pub items: Vec<Discount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub discounts: Vec<DiscountsByOrganization>,
}

// ==================================================================================================
// Cancel Causes / Removal Types / Tips Types
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelCause {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelCausesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub cancel_causes: Vec<CancelCause>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalType {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub can_writeoff_to_cafe: bool,
    #[serde(default)]
    pub can_writeoff_to_waiter: bool,
    #[serde(default)]
    pub can_writeoff_to_user: bool,
    #[serde(default)]
    pub reason_required: bool,
    #[serde(default)]
    pub manual: bool,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalTypesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub removal_types: Vec<RemovalType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organization_ids: Vec<String>,
    #[serde(default)]
    pub order_service_types: Vec<String>,
    #[serde(default)]
    pub payment_types_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsTypesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub tips_types: Vec<TipsType>,
}
