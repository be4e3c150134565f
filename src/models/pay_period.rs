//! Pay period model and request payloads.
//!
//! A pay period is a dated window payroll is computed for. Its lifecycle
//! (DRAFT → APPROVED → LOCKED) is enforced by the service; this module only
//! mirrors the records and the search parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::worker::PayFrequency;

/// Lifecycle status of a pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayPeriodStatus {
    /// Editable; pay items may be (re)generated.
    Draft,
    /// Approved for disbursement.
    Approved,
    /// Closed to further changes.
    Locked,
}

/// A pay period.
///
/// # Example
///
/// ```
/// use fund_disbursement::models::{PayFrequency, PayPeriod, PayPeriodStatus};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let period = PayPeriod {
///     id: Some(7),
///     uuid: Uuid::new_v4(),
///     frequency: PayFrequency::Weekly,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     status: PayPeriodStatus::Draft,
///     label: Some("Week 3".to_string()),
///     created_at: None,
///     updated_at: None,
///     version: 0,
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert_eq!(period.length_in_days(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    /// Numeric database identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique identifier.
    pub uuid: Uuid,
    /// Pay frequency the period covers.
    pub frequency: PayFrequency,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Lifecycle status.
    pub status: PayPeriodStatus,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Creation timestamp as reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp as reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Optimistic-locking version maintained by the service.
    #[serde(default)]
    pub version: i64,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days covered, inclusive of both ends.
    pub fn length_in_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns the label, or a "start → end" rendering when unlabeled.
    pub fn display_name(&self) -> String {
        match self.label.as_deref().filter(|l| !l.trim().is_empty()) {
            Some(label) => label.to_string(),
            None => format!("{} → {}", self.start_date, self.end_date),
        }
    }
}

/// Payload for `POST /payroll/periods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayPeriodRequest {
    /// Pay frequency.
    pub frequency: PayFrequency,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive); must be after `start_date`.
    pub end_date: NaiveDate,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Payload for `PUT /payroll/periods/{uuid}`; absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayPeriodRequest {
    /// New frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<PayFrequency>,
    /// New first day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// New last day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// New label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Query parameters for `GET /payroll/search` and `GET /payroll/periods:csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSearchParams {
    /// Free-text query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Status filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PayPeriodStatus>,
    /// Frequency filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<PayFrequency>,
    /// Earliest start date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_from: Option<NaiveDate>,
    /// Latest start date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_to: Option<NaiveDate>,
    /// Zero-based page index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Sort expression, e.g. "startDate,desc".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl PayrollSearchParams {
    /// Returns a stable textual form used to key cached search results.
    pub fn cache_fingerprint(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
