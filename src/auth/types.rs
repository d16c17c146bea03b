// Authentication wire types

use serde::{Deserialize, Serialize};

/// Body of POST /api/1/access_token
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRequest<'a> {
    pub api_login: &'a str,
}

/// Response of POST /api/1/access_token
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub correlation_id: Option<String>,
}
