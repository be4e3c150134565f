//! Data models mirrored from the fund-disbursement service.
//!
//! These are flat DTOs; the service owns every invariant beyond form-level
//! validation.

mod auth;
mod disbursement;
mod envelope;
mod kpi;
mod pay_period;
mod position;
mod worker;

pub use auth::{LoginRequest, Role, TokenPair, User};
pub use disbursement::{
    BatchDisbursementRequest, BatchReceipt, BatchStatus, DisbursementBatch, DisbursementReceipt,
    MpesaInitiateRequest, Payout, PayoutState, PayoutWorker, SingleDisbursementRequest,
    StatusResponse,
};
pub use envelope::{ApiResponse, Page};
pub use kpi::{PayoutKpi, WorkerKpi};
pub use pay_period::{
    CreatePayPeriodRequest, PayPeriod, PayPeriodStatus, PayrollSearchParams,
    UpdatePayPeriodRequest,
};
pub use position::{CreatePositionRequest, Position, UpdatePositionRequest};
pub use worker::{CreateWorkerRequest, PayFrequency, UpdateWorkerRequest, Worker, WorkerStatus};
