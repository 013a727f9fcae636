//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

use std::time::Duration;

use reqwest::Client;

pub mod calculator;
pub mod clock;
pub mod config;
pub mod correlation;
pub mod enchant_table;
pub mod guide_api;
pub mod kungfu_table;
pub mod ports;
pub mod role_api;
pub mod server_directory;
pub mod tuilan;
pub mod view_api;

/// Shared reqwest client construction for the HTTP adapters.
pub(crate) fn http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}
