//! Configuration loading and management for the console client.
//!
//! This module provides functionality to load the client configuration from a
//! YAML file: service base URL, request timeout, cache freshness windows, the
//! batch-send route and where the session is persisted.
//!
//! # Example
//!
//! ```no_run
//! use fund_disbursement::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/console.yaml").unwrap();
//! println!("Base URL: {}", config.config().base_url);
//! ```

mod loader;
mod types;

pub use loader::{BASE_URL_ENV, ConfigLoader};
pub use types::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_SEARCH_STALE_TIME_SECS, DEFAULT_STALE_TIME_SECS,
    DEFAULT_TIMEOUT_SECS, SendBatchRoute,
};
