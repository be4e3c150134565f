use rust_decimal::Decimal;

use super::{FieldErrors, Form};
use crate::models::SingleDisbursementRequest;
use crate::validation::parse_uuid;
use crate::views::format_kes;

/// Form for paying one worker directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleDisbursementForm {
    /// Selected worker uuid.
    pub worker_uuid: String,
    /// Amount to pay, strictly positive.
    pub amount: Option<Decimal>,
}

impl SingleDisbursementForm {
    /// Validates and builds the request.
    pub fn to_request(&self) -> Result<SingleDisbursementRequest, FieldErrors> {
        self.validate()?;
        let Some(amount) = self.amount else {
            return Err(FieldErrors::new());
        };
        Ok(SingleDisbursementRequest {
            worker_uuid: self.worker_uuid.trim().to_string(),
            amount,
        })
    }
}

impl Form for SingleDisbursementForm {
    const SUBJECT: &'static str = "Disbursement";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.worker_uuid.trim().is_empty() {
            errors.insert("workerUuid", "Please select a worker");
        } else if parse_uuid("workerUuid", &self.worker_uuid).is_err() {
            errors.insert("workerUuid", "Invalid worker selection");
        }
        match self.amount {
            None => errors.insert("amount", "Please enter an amount"),
            Some(amount) if amount <= Decimal::ZERO => {
                errors.insert("amount", "Amount must be a positive number")
            }
            Some(_) => {}
        }
        errors.into_result()
    }

    fn display_name(&self) -> String {
        self.amount
            .map(format_kes)
            .unwrap_or_else(|| "Disbursement".to_string())
    }
}
