use crate::models::{DisbursementBatch, PayPeriod, Payout, Position, Worker};

/// Every collection the console has fetched, frozen at one point in time.
///
/// Derived views are pure functions over a snapshot; they never fetch and
/// never mutate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Workers.
    pub workers: Vec<Worker>,
    /// Positions.
    pub positions: Vec<Position>,
    /// Pay periods.
    pub pay_periods: Vec<PayPeriod>,
    /// Disbursement batches (the fetched page).
    pub batches: Vec<DisbursementBatch>,
    /// Payouts (the fetched page).
    pub payouts: Vec<Payout>,
}

impl Snapshot {
    /// Looks up a position by identifier.
    pub fn position(&self, uuid: &uuid::Uuid) -> Option<&Position> {
        self.positions.iter().find(|p| &p.uuid == uuid)
    }

    /// Looks up a worker by identifier.
    pub fn worker(&self, uuid: &uuid::Uuid) -> Option<&Worker> {
        self.workers.iter().find(|w| &w.uuid == uuid)
    }
}
