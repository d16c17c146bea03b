// Data models for the iiko Cloud API

pub mod common;
pub mod organizations;
pub mod dictionaries;
pub mod menu;
pub mod orders;
pub mod address;
pub mod terminal_groups;
pub mod customers;
pub mod employees;
pub mod commands;
pub mod webhook;

pub use common::{BaseResponse, ErrorInfo, IdName};
pub use organizations::{Organization, OrganizationsRequest, OrganizationsResponse};
