use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommandStatusRequest<'a> {
    pub organization_id: &'a str,
    pub correlation_id: &'a str,
}

/// Body of POST /api/1/notifications/send
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub order_source: String,
    pub order_id: String,
    pub additional_info: String,
    pub message_type: String,
    pub organization_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandException {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Progress of an asynchronous command (`InProgress`, `Success` or `Error`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandStatus {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<CommandException>,
}

impl CommandStatus {
    pub fn is_finished(&self) -> bool {
        self.state != "InProgress"
    }
}
