use serde::{Deserialize, Serialize};

// ==================================================================================================
// Request Models
// ==================================================================================================

/// How a loyalty customer is looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerIdentifier {
    Phone(String),
    CardTrack(String),
    CardNumber(String),
    Email(String),
    Id(String),
}

impl CustomerIdentifier {
    /// Value of the `type` field for this identifier
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Phone(_) => "phone",
            Self::CardTrack(_) => "cardTrack",
            Self::CardNumber(_) => "cardNumber",
            Self::Email(_) => "email",
            Self::Id(_) => "id",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Phone(v)
            | Self::CardTrack(v)
            | Self::CardNumber(v)
            | Self::Email(v)
            | Self::Id(v) => v,
        }
    }
}

/// Body of POST /api/1/loyalty/iiko/customer/info.
/// The identifier goes under the key named by its kind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerInfoRequest<'a> {
    pub organization_id: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_track: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
}

impl<'a> CustomerInfoRequest<'a> {
    pub fn new(organization_id: &'a str, identifier: &'a CustomerIdentifier) -> Self {
        let mut request = Self {
            organization_id,
            kind: identifier.kind(),
            phone: None,
            card_track: None,
            card_number: None,
            email: None,
            id: None,
        };
        let value = Some(identifier.value());
        match identifier {
            CustomerIdentifier::Phone(_) => request.phone = value,
            CustomerIdentifier::CardTrack(_) => request.card_track = value,
            CustomerIdentifier::CardNumber(_) => request.card_number = value,
            CustomerIdentifier::Email(_) => request.email = value,
            CustomerIdentifier::Id(_) => request.id = value,
        }
        request
    }
}

/// Body of POST /api/1/loyalty/iiko/customer/create_or_update.
///
/// Without `id` a new customer is created; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_track: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sur_name: Option<String>,
    /// `yyyy-MM-dd HH:mm:ss.fff`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 0 - not specified, 1 - male, 2 - female
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_receive_promo_actions_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerUpsertRequest<'a> {
    pub organization_id: &'a str,
    #[serde(flatten)]
    pub customer: &'a CustomerUpsert,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProgramAddRequest<'a> {
    pub customer_id: &'a str,
    pub program_id: &'a str,
    pub organization_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CardRequest<'a> {
    pub customer_id: &'a str,
    pub card_track: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<&'a str>,
    pub organization_id: &'a str,
}

/// Wallet operation parameters shared by hold, topup and chargeoff
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOperation {
    pub customer_id: String,
    pub wallet_id: String,
    pub sum: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl WalletOperation {
    pub fn new(customer_id: impl Into<String>, wallet_id: impl Into<String>, sum: f64) -> Self {
        Self {
            customer_id: customer_id.into(),
            wallet_id: wallet_id.into(),
            sum,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WalletRequest<'a> {
    #[serde(flatten)]
    pub operation: &'a WalletOperation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<&'a str>,
    pub organization_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CancelHoldRequest<'a> {
    pub organization_id: &'a str,
    pub transaction_id: &'a str,
}

// ==================================================================================================
// Response Models
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCard {
    pub id: String,
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_default_for_new_guests: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: i64,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub sex: i64,
    #[serde(default)]
    pub consent_status: i64,
    #[serde(default)]
    pub anonymized: bool,
    #[serde(default)]
    pub cards: Vec<CustomerCard>,
    #[serde(default)]
    pub categories: Vec<CustomerCategory>,
    #[serde(default)]
    pub wallet_balances: Vec<WalletBalance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_receive_promo_actions_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_receive_loyalty_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_receive_order_status_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_data_consent_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_data_consent_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_data_processing_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_data_processing_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerIdResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramAddResponse {
    pub user_wallet_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletHoldResponse {
    pub transaction_id: String,
}
