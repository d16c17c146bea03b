// Domain method groups
//
// Each group is a trait so callers can be handed a narrowed capability and
// tests can substitute fakes. The concrete handles are cheap to clone and
// share the client's pipeline.

pub mod address;
pub mod commands;
pub mod customers;
pub mod deliveries;
pub mod dictionaries;
pub mod employees;
pub mod menu;
pub mod notifications;
pub mod orders;
pub mod terminal_groups;
pub mod webhook;

pub use address::{AddressApi, AddressHandle};
pub use commands::{CommandsApi, CommandsHandle};
pub use customers::{CustomersApi, CustomersHandle};
pub use deliveries::{DeliveriesApi, DeliveriesHandle};
pub use dictionaries::{DictionariesApi, DictionariesHandle};
pub use employees::{EmployeesApi, EmployeesHandle};
pub use menu::{MenuApi, MenuHandle};
pub use notifications::{NotificationsApi, NotificationsHandle};
pub use orders::{OrdersApi, OrdersHandle};
pub use terminal_groups::{TerminalGroupsApi, TerminalGroupsHandle};
pub use webhook::WebhookParser;

use crate::error::{ApiResult, DomainError};

pub(crate) const EMPTY_ORGANIZATIONS: &str = "empty organization id list";

/// Local precondition: endpoints that take an organization list refuse an
/// empty one before anything goes over the wire
pub(crate) fn require_organizations<T>(organization_ids: &[String]) -> Option<ApiResult<T>> {
    if organization_ids.is_empty() {
        Some(Ok(Err(DomainError::precondition(EMPTY_ORGANIZATIONS))))
    } else {
        None
    }
}
