use serde::{Deserialize, Serialize};

/// Body of POST /api/1/organizations
///
/// An empty id list is omitted and means "all organizations of the login".
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationsRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub organization_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_additional_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_disabled: Option<bool>,
}

impl OrganizationsRequest {
    pub fn with_organization_ids(mut self, ids: Vec<String>) -> Self {
        self.organization_ids = ids;
        self
    }

    pub fn with_additional_info(mut self, value: bool) -> Self {
        self.return_additional_info = Some(value);
        self
    }

    pub fn with_disabled(mut self, value: bool) -> Self {
        self.include_disabled = Some(value);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_uae_addressing_system: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_iso_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_minimum_denomination: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_phone_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_source_required_in_delivery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_delivery_city_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delivery_city_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_call_center_payment_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_item_comment_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_format_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_confirmation_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_allowed_interval_in_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub organizations: Vec<Organization>,
}

impl OrganizationsResponse {
    /// Ids of the returned organizations, in response order
    pub fn ids(&self) -> Vec<String> {
        self.organizations.iter().map(|o| o.id.clone()).collect()
    }
}
