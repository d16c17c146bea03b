// Passive decoding of webhook batches; no network involved

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::webhook::WebhookDeliveryOrderEvent;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebhookParser;

impl WebhookParser {
    /// Decode a batch of delivery order events.
    ///
    /// The first element that does not fit aborts the batch; nothing decoded
    /// before it is returned.
    pub fn parse_order_events(&self, batch: &[Value]) -> Result<Vec<WebhookDeliveryOrderEvent>> {
        batch
            .iter()
            .enumerate()
            .map(|(index, item)| {
                WebhookDeliveryOrderEvent::deserialize(item).map_err(|source| Error::Decode {
                    path: format!("webhook[{}]", index),
                    source,
                })
            })
            .collect()
    }

    /// Reserve (table booking) events are not modelled yet
    pub fn parse_reserve_events(&self, _batch: &[Value]) -> Result<Vec<Value>> {
        Err(Error::NotImplemented("parse_reserve_events"))
    }
}
