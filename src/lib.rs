//! Console client for the fund-disbursement payroll service
//!
//! This crate provides the typed client, session handling, query cache and
//! form state behind the admin console: positions, workers, pay periods,
//! disbursement batches and mobile-money payouts.

#![warn(missing_docs)]

pub mod api;
pub mod cache;
pub mod config;
pub mod console;
pub mod error;
pub mod forms;
pub mod models;
pub mod routing;
pub mod services;
pub mod session;
pub mod validation;
pub mod views;
