//! HTTP access to the fund-disbursement service.

mod client;
pub mod endpoints;

pub use client::ApiClient;
