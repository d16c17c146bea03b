use serde::{Deserialize, Serialize};

use super::orders::OrderEmployee;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeInfoRequest<'a> {
    pub organization_id: &'a str,
    pub id: &'a str,
}

/// Body shared by the shift endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShiftRequest<'a> {
    pub organization_id: &'a str,
    pub terminal_group_id: &'a str,
    pub employee_id: &'a str,
    /// Only accepted by clockin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShiftByCourierRequest<'a> {
    pub employee_id: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouriersByOrganization {
    pub organization_id: String,
    #[serde(default)]
    pub items: Vec<Courier>,
}

impl CouriersByOrganization {
    /// Couriers not marked deleted
    pub fn active(&self) -> impl Iterator<Item = &Courier> {
        self.items.iter().filter(|c| !c.is_deleted)
    }

    pub fn inactive(&self) -> impl Iterator<Item = &Courier> {
        self.items.iter().filter(|c| c.is_deleted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouriersResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default)]
    pub employees: Vec<CouriersByOrganization>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub employee: OrderEmployee,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInfoResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub employee_info: EmployeeInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTerminal {
    pub terminal_group_id: String,
    #[serde(default)]
    pub is_open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTerminalsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    pub employee_id: String,
    #[serde(default)]
    pub terminals: Vec<EmployeeTerminal>,
}
