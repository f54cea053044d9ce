//! API layer for the SimpleBudget client
//!
//! `client` performs the HTTP requests; `payload` normalizes the error
//! bodies the API returns on failure.

pub mod client;
pub mod payload;

pub use client::ApiClient;
pub use payload::normalize_error;
