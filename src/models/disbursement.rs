//! Disbursement batches, payouts, and mobile-money payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a disbursement batch.
///
/// Batches are created as drafts and sent as a unit. The service reports a
/// few additional states once the rail picks a batch up; unrecognised values
/// deserialize as [`BatchStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Created, not yet sent.
    Draft,
    /// Handed to the payment rail.
    Sent,
    /// Disbursed by the rail.
    Disbursed,
    /// Being processed by the rail.
    Processing,
    /// All payouts settled.
    Completed,
    /// The batch failed as a whole.
    Failed,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

impl BatchStatus {
    /// Returns true once the batch has left the draft state.
    pub fn is_sent(&self) -> bool {
        !matches!(self, BatchStatus::Draft)
    }
}

/// State of a single payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutState {
    /// Waiting to be sent.
    Pending,
    /// Submitted to the rail.
    Sent,
    /// Confirmed by the rail.
    Completed,
    /// Rejected by the rail.
    Failed,
    /// A state this client does not know.
    #[serde(other)]
    Unknown,
}

/// Worker details embedded in a payout row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutWorker {
    /// Worker name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Worker phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A single worker's money transfer within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    /// Unique identifier.
    pub uuid: Uuid,
    /// Owning batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_uuid: Option<Uuid>,
    /// Receiving worker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_uuid: Option<Uuid>,
    /// Receiving worker's name, when flattened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_name: Option<String>,
    /// Receiving worker's phone, when flattened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_phone: Option<String>,
    /// Receiving worker, when nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker: Option<PayoutWorker>,
    /// Amount in KES.
    pub amount: Decimal,
    /// Transfer state.
    pub state: PayoutState,
    /// Mobile-money receipt number, once settled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpesa_receipt: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Payout {
    /// Returns the worker name from whichever shape the service used.
    pub fn display_worker_name(&self) -> Option<&str> {
        self.worker_name
            .as_deref()
            .or_else(|| self.worker.as_ref().and_then(|w| w.full_name.as_deref()))
    }

    /// Returns the worker phone from whichever shape the service used.
    pub fn display_worker_phone(&self) -> Option<&str> {
        self.worker_phone
            .as_deref()
            .or_else(|| self.worker.as_ref().and_then(|w| w.phone.as_deref()))
    }
}

/// A grouped set of payouts sent to the rail as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisbursementBatch {
    /// Unique identifier.
    pub batch_uuid: Uuid,
    /// Batch status.
    pub status: BatchStatus,
    /// Number of payouts in the batch.
    #[serde(default)]
    pub payout_count: u32,
    /// Sum of payout amounts in KES.
    #[serde(default)]
    pub amount_total: Decimal,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Payouts, when the service includes them.
    #[serde(default)]
    pub payouts: Vec<Payout>,
}

/// Data returned when a batch is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReceipt {
    /// The new batch.
    pub batch_uuid: Uuid,
}

/// Data returned by a single disbursement.
///
/// Depending on deployment the service answers with the new batch, a status
/// string, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisbursementReceipt {
    /// The batch the payout was placed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_uuid: Option<Uuid>,
    /// Status string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Generic `{ "status": ... }` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Status string.
    #[serde(default)]
    pub status: String,
}

/// Payload for `POST /disbursements/single`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleDisbursementRequest {
    /// Receiving worker, as entered.
    pub worker_uuid: String,
    /// Amount in KES; must be positive.
    pub amount: Decimal,
}

/// Payload for `POST /disbursements/batch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDisbursementRequest {
    /// Receiving workers.
    pub worker_uuids: Vec<Uuid>,
}

/// Payload for `POST /mpesa/initiate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MpesaInitiateRequest {
    /// Calling application name.
    pub app: String,
    /// Receiving phone number.
    pub phone_number: String,
    /// Amount in KES; must be positive.
    pub amount: Decimal,
    /// Optional remarks shown on the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_batch_with_payouts() {
        let json = r#"{
            "batchUuid": "3e1f2a4b-5c6d-4e7f-8a9b-0c1d2e3f4a5b",
            "status": "DRAFT",
            "payoutCount": 1,
            "amountTotal": 500,
            "payouts": [{
                "uuid": "7a6b5c4d-3e2f-4a1b-9c8d-7e6f5a4b3c2d",
                "worker": { "fullName": "Mary Akinyi", "phone": "+254711111111" },
                "amount": 500,
                "state": "PENDING"
            }]
        }"#;
        let batch: DisbursementBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.status, BatchStatus::Draft);
        assert_eq!(batch.payout_count, 1);
        assert_eq!(batch.amount_total, Decimal::new(500, 0));
        assert_eq!(batch.payouts[0].display_worker_name(), Some("Mary Akinyi"));
        assert_eq!(batch.payouts[0].display_worker_phone(), Some("+254711111111"));
    }

    #[test]
    fn test_unknown_statuses_are_tolerated() {
        let status: BatchStatus = serde_json::from_str("\"QUEUED\"").unwrap();
        assert_eq!(status, BatchStatus::Unknown);
        let state: PayoutState = serde_json::from_str("\"REVERSED\"").unwrap();
        assert_eq!(state, PayoutState::Unknown);
    }

    #[test]
    fn test_is_sent() {
        assert!(!BatchStatus::Draft.is_sent());
        assert!(BatchStatus::Sent.is_sent());
        assert!(BatchStatus::Disbursed.is_sent());
    }

    #[test]
    fn test_flattened_worker_fields_take_precedence() {
        let json = r#"{
            "uuid": "7a6b5c4d-3e2f-4a1b-9c8d-7e6f5a4b3c2d",
            "workerName": "Flat Name",
            "worker": { "fullName": "Nested Name" },
            "amount": 10,
            "state": "SENT",
            "mpesaReceipt": "QK12ABC"
        }"#;
        let payout: Payout = serde_json::from_str(json).unwrap();
        assert_eq!(payout.display_worker_name(), Some("Flat Name"));
        assert_eq!(payout.display_worker_phone(), None);
    }

    #[test]
    fn test_batch_request_wire_name() {
        let request = BatchDisbursementRequest {
            worker_uuids: vec![Uuid::nil()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("workerUuids").is_some());
    }
}
