// iiko Cloud API client - library root

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod detect;
pub mod error;
pub mod http_client;
pub mod models;
pub mod session;

pub use client::Client;
pub use config::ClientConfig;
pub use detect::detect_api_error;
pub use error::{ApiResult, DomainError, Error, Result};
