//! Derived views: pure functions over fetched data.
//!
//! Nothing here fetches, caches or mutates. The console recomputes these from
//! a [`Snapshot`] whenever it needs them.

mod filters;
mod snapshot;
mod stats;

pub use filters::{
    UNKNOWN_POSITION, active_positions, draft_batches, draft_pay_periods, pay_periods_with_status,
    payable_workers, positions_by_active, search_payouts, workers_with_positions,
};
pub use snapshot::Snapshot;
pub use stats::{DashboardStats, PayoutSummary, dashboard_stats, format_kes, payout_summary};
