//! Aggregates and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::{
    PayPeriod, PayPeriodStatus, Payout, PayoutState, Position, Worker, WorkerStatus,
};

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// All workers.
    pub total_workers: usize,
    /// Workers with status `ACTIVE`.
    pub active_workers: usize,
    /// All positions.
    pub total_positions: usize,
    /// Positions with the active flag set.
    pub active_positions: usize,
    /// All pay periods.
    pub total_pay_periods: usize,
    /// Pay periods in `DRAFT`.
    pub draft_pay_periods: usize,
    /// Pay periods in `APPROVED`.
    pub approved_pay_periods: usize,
    /// Pay periods in `LOCKED`.
    pub locked_pay_periods: usize,
}

/// Aggregates the dashboard counts.
pub fn dashboard_stats(
    workers: &[Worker],
    positions: &[Position],
    pay_periods: &[PayPeriod],
) -> DashboardStats {
    let with_status = |status: PayPeriodStatus| {
        pay_periods.iter().filter(|p| p.status == status).count()
    };
    DashboardStats {
        total_workers: workers.len(),
        active_workers: workers
            .iter()
            .filter(|w| w.status == WorkerStatus::Active)
            .count(),
        total_positions: positions.len(),
        active_positions: positions.iter().filter(|p| p.active).count(),
        total_pay_periods: pay_periods.len(),
        draft_pay_periods: with_status(PayPeriodStatus::Draft),
        approved_pay_periods: with_status(PayPeriodStatus::Approved),
        locked_pay_periods: with_status(PayPeriodStatus::Locked),
    }
}

/// Totals over a list of payouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSummary {
    /// Number of payouts.
    pub count: usize,
    /// Sum of all amounts.
    pub total_amount: Decimal,
    /// Payouts still pending.
    pub pending: usize,
    /// Payouts submitted to the rail.
    pub sent: usize,
    /// Payouts confirmed by the rail.
    pub completed: usize,
    /// Payouts rejected by the rail.
    pub failed: usize,
}

/// Sums payouts and counts them by state. Unknown states only count towards
/// the total.
pub fn payout_summary(payouts: &[Payout]) -> PayoutSummary {
    payouts
        .iter()
        .fold(PayoutSummary::default(), |mut summary, payout| {
            summary.count += 1;
            summary.total_amount += payout.amount;
            match payout.state {
                PayoutState::Pending => summary.pending += 1,
                PayoutState::Sent => summary.sent += 1,
                PayoutState::Completed => summary.completed += 1,
                PayoutState::Failed => summary.failed += 1,
                PayoutState::Unknown => {}
            }
            summary
        })
}

const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats an amount in Kenyan shillings.
///
/// Follows the service's locale display: at most three fraction digits
/// (rounded half away from zero), comma-grouped thousands, no trailing
/// fractional zeros.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use fund_disbursement::views::format_kes;
///
/// assert_eq!(format_kes(Decimal::new(123450, 2)), "KES 1,234.5");
/// assert_eq!(format_kes(Decimal::new(500, 0)), "KES 500");
/// assert_eq!(format_kes(Decimal::new(1234567891, 3)), "KES 1,234,567.891");
/// ```
pub fn format_kes(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("KES {}{}.{}", sign, grouped, fraction),
        None => format!("KES {}{}", sign, grouped),
    }
}
