//! Filtering views over fetched collections.

use crate::models::{
    BatchStatus, DisbursementBatch, PayPeriod, PayPeriodStatus, Payout, Position, Worker,
};

/// Name shown for a worker whose position is not among the fetched positions.
pub const UNKNOWN_POSITION: &str = "Unknown";

/// Positions with the active flag set.
pub fn active_positions(positions: &[Position]) -> Vec<&Position> {
    positions_by_active(positions, Some(true))
}

/// Positions whose active flag equals `active`; all of them when `None`.
pub fn positions_by_active(positions: &[Position], active: Option<bool>) -> Vec<&Position> {
    positions
        .iter()
        .filter(|p| active.is_none_or(|a| p.active == a))
        .collect()
}

/// Pay periods still in `DRAFT`.
pub fn draft_pay_periods(periods: &[PayPeriod]) -> Vec<&PayPeriod> {
    pay_periods_with_status(periods, PayPeriodStatus::Draft)
}

/// Pay periods in `status`.
pub fn pay_periods_with_status(periods: &[PayPeriod], status: PayPeriodStatus) -> Vec<&PayPeriod> {
    periods.iter().filter(|p| p.status == status).collect()
}

/// Batches not yet sent.
pub fn draft_batches(batches: &[DisbursementBatch]) -> Vec<&DisbursementBatch> {
    batches
        .iter()
        .filter(|b| b.status == BatchStatus::Draft)
        .collect()
}

/// Workers eligible for a payment: payable and `ACTIVE`.
pub fn payable_workers(workers: &[Worker]) -> Vec<&Worker> {
    workers.iter().filter(|w| w.can_be_paid()).collect()
}

/// Workers with `position_name` filled in from `positions`.
///
/// A worker whose position is missing gets [`UNKNOWN_POSITION`], even if the
/// service had already supplied a name.
pub fn workers_with_positions(workers: &[Worker], positions: &[Position]) -> Vec<Worker> {
    workers
        .iter()
        .map(|worker| {
            let name = positions
                .iter()
                .find(|p| p.uuid == worker.position_uuid)
                .map_or(UNKNOWN_POSITION, |p| p.name.as_str());
            Worker {
                position_name: Some(name.to_string()),
                ..worker.clone()
            }
        })
        .collect()
}

/// Payouts matching a free-text query.
///
/// The worker name and receipt match case-insensitively, the phone number
/// matches as typed. A blank query matches everything.
///
/// # Example
///
/// ```
/// use fund_disbursement::views::search_payouts;
///
/// assert!(search_payouts(&[], "jane").is_empty());
/// ```
pub fn search_payouts<'a>(payouts: &'a [Payout], query: &str) -> Vec<&'a Payout> {
    let query = query.trim();
    if query.is_empty() {
        return payouts.iter().collect();
    }
    let lowered = query.to_lowercase();
    payouts
        .iter()
        .filter(|p| {
            p.display_worker_name()
                .is_some_and(|n| n.to_lowercase().contains(&lowered))
                || p.display_worker_phone().is_some_and(|ph| ph.contains(query))
                || p
                    .mpesa_receipt
                    .as_deref()
                    .is_some_and(|r| r.to_lowercase().contains(&lowered))
        })
        .collect()
}
