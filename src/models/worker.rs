//! Worker model and request payloads.
//!
//! This module defines the [`Worker`] record together with its
//! [`PayFrequency`] and [`WorkerStatus`] enums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often a worker (or a pay period) is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayFrequency {
    /// Paid every day.
    Daily,
    /// Paid every week.
    Weekly,
    /// Paid every month.
    Monthly,
}

/// Employment status of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerStatus {
    /// Currently employed.
    Active,
    /// No longer employed.
    Inactive,
}

/// A worker on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    /// Unique identifier.
    pub uuid: Uuid,
    /// Full name.
    pub full_name: String,
    /// Mobile-money phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// How often the worker is paid.
    pub pay_frequency: PayFrequency,
    /// Pay rate in KES per period.
    pub rate: Decimal,
    /// Employment status.
    pub status: WorkerStatus,
    /// Whether the worker may receive disbursements.
    pub payable: bool,
    /// Optional team name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Optional national ID number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// Optional KRA PIN (tax identifier).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kra_pin: Option<String>,
    /// The worker's position.
    pub position_uuid: Uuid,
    /// Position name, when the service denormalises it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_name: Option<String>,
}

impl Worker {
    /// Returns true if the worker is active and payable.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_disbursement::models::{PayFrequency, Worker, WorkerStatus};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let worker = Worker {
    ///     uuid: Uuid::new_v4(),
    ///     full_name: "Jane Wanjiku".to_string(),
    ///     phone: "+254712345678".to_string(),
    ///     email: "jane@example.com".to_string(),
    ///     pay_frequency: PayFrequency::Weekly,
    ///     rate: Decimal::new(1500, 0),
    ///     status: WorkerStatus::Active,
    ///     payable: true,
    ///     team: None,
    ///     national_id: None,
    ///     kra_pin: None,
    ///     position_uuid: Uuid::new_v4(),
    ///     position_name: None,
    /// };
    /// assert!(worker.can_be_paid());
    /// ```
    pub fn can_be_paid(&self) -> bool {
        self.payable && self.status == WorkerStatus::Active
    }

    /// Returns true if the worker is missing a national ID or KRA PIN.
    pub fn has_kyc_gap(&self) -> bool {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        blank(&self.national_id) || blank(&self.kra_pin)
    }
}

/// Payload for `POST /admin/workers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerRequest {
    /// Full name.
    pub full_name: String,
    /// Mobile-money phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Pay frequency.
    pub pay_frequency: PayFrequency,
    /// Pay rate in KES; must be positive.
    pub rate: Decimal,
    /// Optional national ID number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// Optional KRA PIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kra_pin: Option<String>,
    /// Optional team name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Position identifier, as entered.
    pub position_uuid: String,
}

/// Payload for `PATCH /admin/workers/{uuid}`; absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerRequest {
    /// New full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New pay frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_frequency: Option<PayFrequency>,
    /// New rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// New team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// New position identifier, as entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_uuid: Option<String>,
    /// New payable flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payable: Option<bool>,
    /// New national ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// New KRA PIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kra_pin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker_json() -> &'static str {
        r#"{
            "uuid": "5d0c3b9e-2a6f-4c1e-8f0d-1b2c3d4e5f60",
            "fullName": "Peter Otieno",
            "phone": "+254700000001",
            "email": "peter@example.com",
            "payFrequency": "DAILY",
            "rate": 850.5,
            "status": "ACTIVE",
            "payable": false,
            "positionUuid": "0b7f1c52-3c4e-4d59-9a57-7d3f2f0a9e11",
            "kraPin": "A123456789B"
        }"#
    }

    #[test]
    fn test_deserialize_worker() {
        let worker: Worker = serde_json::from_str(worker_json()).unwrap();
        assert_eq!(worker.full_name, "Peter Otieno");
        assert_eq!(worker.pay_frequency, PayFrequency::Daily);
        assert_eq!(worker.rate, Decimal::new(8505, 1));
        assert_eq!(worker.status, WorkerStatus::Active);
        assert!(!worker.payable);
        assert!(worker.position_name.is_none());
    }

    #[test]
    fn test_can_be_paid_requires_payable_and_active() {
        let mut worker: Worker = serde_json::from_str(worker_json()).unwrap();
        assert!(!worker.can_be_paid());
        worker.payable = true;
        assert!(worker.can_be_paid());
        worker.status = WorkerStatus::Inactive;
        assert!(!worker.can_be_paid());
    }

    #[test]
    fn test_kyc_gap_when_national_id_missing() {
        let mut worker: Worker = serde_json::from_str(worker_json()).unwrap();
        assert!(worker.has_kyc_gap());
        worker.national_id = Some("12345678".to_string());
        assert!(!worker.has_kyc_gap());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&PayFrequency::Monthly).unwrap(),
            "\"MONTHLY\""
        );
        assert_eq!(
            serde_json::to_string(&WorkerStatus::Inactive).unwrap(),
            "\"INACTIVE\""
        );
    }
}
