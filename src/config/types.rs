//! Configuration types for the console client.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default service base URL.
pub const DEFAULT_BASE_URL: &str = "https://fund-disbursement-production.up.railway.app/api/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default freshness window for cached collections.
pub const DEFAULT_STALE_TIME_SECS: u64 = 60;

/// Default freshness window for cached search results.
pub const DEFAULT_SEARCH_STALE_TIME_SECS: u64 = 30;

/// Which backend route sends a draft batch to the payment rail.
///
/// The service has exposed both `/disbursements/send/{uuid}` and
/// `/disbursements/disburse/{uuid}`; deployments pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendBatchRoute {
    /// `POST /disbursements/send/{uuid}`.
    #[default]
    Send,
    /// `POST /disbursements/disburse/{uuid}`.
    Disburse,
}

/// Client configuration.
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service base URL including the API prefix (e.g. ".../api/v1").
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// The route used to send a batch.
    pub send_batch_route: SendBatchRoute,
    /// How long cached collections stay fresh, in seconds.
    pub stale_time_secs: u64,
    /// How long cached search results stay fresh, in seconds.
    pub search_stale_time_secs: u64,
    /// File the session is persisted to; in-memory when absent.
    pub session_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            send_batch_route: SendBatchRoute::default(),
            stale_time_secs: DEFAULT_STALE_TIME_SECS,
            search_stale_time_secs: DEFAULT_SEARCH_STALE_TIME_SECS,
            session_path: None,
        }
    }
}

impl ClientConfig {
    /// Creates a default configuration pointed at the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the freshness window for collections.
    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_time_secs)
    }

    /// Returns the freshness window for search results.
    pub fn search_stale_time(&self) -> Duration {
        Duration::from_secs(self.search_stale_time_secs)
    }

    /// Returns the base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
