use serde::{Deserialize, Serialize};

// ==================================================================================================
// Shared Models
// ==================================================================================================

/// Envelope of operations that only return a correlation id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdName {
    pub id: String,
    pub name: String,
}

/// Error details attached to an order that failed to be created
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<serde_json::Value>,
}

// ==================================================================================================
// Shared Request Bodies
// ==================================================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrganizationIdsRequest<'a> {
    pub organization_ids: &'a [String],
}

/// Empty JSON object body
#[derive(Serialize)]
pub(crate) struct EmptyRequest {}
