//! KPI summaries reported by the service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Worker headcount KPIs from `GET /kpi/workers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerKpi {
    /// All workers.
    pub total_workers: u64,
    /// Workers with status ACTIVE.
    pub active_workers: u64,
    /// Workers with status INACTIVE.
    pub inactive_workers: u64,
    /// Workers flagged payable.
    pub payable_workers: u64,
    /// Workers missing KYC details.
    pub kyc_gaps: u64,
    /// Share of workers with a valid phone, in percent.
    pub phone_valid_pct: Decimal,
}

/// Payout KPIs from `GET /kpi/payouts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayoutKpi {
    /// All payouts.
    pub total: u64,
    /// Pending payouts.
    pub pending: u64,
    /// Sent payouts.
    pub sent: u64,
    /// Failed payouts.
    pub failed: u64,
    /// Successful payouts.
    pub success: u64,
    /// Sum of all payout amounts in KES.
    pub total_amount: Decimal,
    /// Sum of successful payout amounts in KES.
    pub success_amount: Decimal,
}

impl PayoutKpi {
    /// Returns the success rate as a whole percentage, if any payouts exist.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_disbursement::models::PayoutKpi;
    ///
    /// let kpi = PayoutKpi { total: 3, success: 2, ..Default::default() };
    /// assert_eq!(kpi.success_rate_pct(), Some(67));
    /// assert_eq!(PayoutKpi::default().success_rate_pct(), None);
    /// ```
    pub fn success_rate_pct(&self) -> Option<u64> {
        if self.total == 0 {
            return None;
        }
        // Round half up.
        Some((self.success * 200 + self.total) / (self.total * 2))
    }
}
