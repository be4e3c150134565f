//! One service per resource group.
//!
//! Every method validates and sanitises its input first, then issues at most
//! one request through the shared [`ApiClient`](crate::api::ApiClient).
//! Failures propagate unchanged; multi-step workflows are the caller's job.

mod auth;
mod disbursements;
mod kpi;
mod mpesa;
mod payroll;
mod positions;
mod workers;

pub use auth::{AuthService, LOGIN_FAILED};
pub use disbursements::DisbursementService;
pub use kpi::KpiService;
pub use mpesa::MpesaService;
pub use payroll::PayrollService;
pub use positions::{MAX_POSITION_NAME, PositionService};
pub use workers::{MAX_WORKER_NAME, WorkerService};
