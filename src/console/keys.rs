//! Cache keys for every console query.

use crate::cache::CacheKey;
use crate::models::PayrollSearchParams;

fn item(uuid: &str) -> String {
    uuid.trim().to_ascii_lowercase()
}

/// All positions, and the prefix of every position key.
pub fn positions() -> CacheKey {
    CacheKey::new(["admin", "positions"])
}

/// One position.
pub fn position(uuid: &str) -> CacheKey {
    positions().child(item(uuid))
}

/// Prefix of every worker key.
pub fn workers() -> CacheKey {
    CacheKey::new(["admin", "workers"])
}

/// The unpaged worker list.
pub fn all_workers() -> CacheKey {
    workers().child("all")
}

/// One page of workers.
pub fn workers_page(page: u32, size: u32) -> CacheKey {
    workers().child(page).child(size)
}

/// One worker.
pub fn worker(uuid: &str) -> CacheKey {
    workers().child(item(uuid))
}

/// Worker KPI.
pub fn worker_kpi() -> CacheKey {
    CacheKey::new(["workerKpi"])
}

/// All pay periods, and the prefix of every pay period key.
pub fn pay_periods() -> CacheKey {
    CacheKey::new(["admin", "payPeriods"])
}

/// One pay period.
pub fn pay_period(uuid: &str) -> CacheKey {
    pay_periods().child(item(uuid))
}

/// One pay period search.
pub fn pay_period_search(params: &PayrollSearchParams) -> CacheKey {
    pay_periods()
        .child("search")
        .child(params.cache_fingerprint())
}

/// Prefix of every batch listing key.
pub fn batches() -> CacheKey {
    CacheKey::new(["disbursementBatches"])
}

/// One page of batches.
pub fn batches_page(page: u32, size: u32) -> CacheKey {
    batches().child(page).child(size)
}

/// One batch.
pub fn batch(uuid: &str) -> CacheKey {
    CacheKey::new(["disbursementBatch"]).child(item(uuid))
}

/// Prefix of every payout listing key.
pub fn payouts() -> CacheKey {
    CacheKey::new(["payouts"])
}

/// One page of payouts.
pub fn payouts_page(page: u32, size: u32) -> CacheKey {
    payouts().child(page).child(size)
}

/// Payout KPI.
pub fn payout_kpi() -> CacheKey {
    CacheKey::new(["payoutKpi"])
}
