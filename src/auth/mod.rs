// Authentication module
// Manages bearer token lifecycle for the iiko API

mod types;
mod manager;
mod refresh;

pub use manager::{TokenManager, TOKEN_TTL};
