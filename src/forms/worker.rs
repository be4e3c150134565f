use rust_decimal::Decimal;

use super::{FieldErrors, Form};
use crate::models::{CreateWorkerRequest, PayFrequency, UpdateWorkerRequest, Worker};
use crate::services::MAX_WORKER_NAME;
use crate::validation::{parse_uuid, validate_email, validate_phone};

/// Message shown when no valid position is selected.
pub const INVALID_POSITION_SELECTION: &str = "Invalid position selection";

/// Create/edit form for a worker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerForm {
    /// Full name, 1..=100 characters.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Phone number in E.164 shape.
    pub phone: String,
    /// Pay frequency.
    pub pay_frequency: Option<PayFrequency>,
    /// Pay rate, strictly positive.
    pub rate: Option<Decimal>,
    /// Team; blank means none.
    pub team: String,
    /// Selected position uuid.
    pub position_uuid: String,
    /// National id; blank means none.
    pub national_id: String,
    /// Tax PIN; blank means none.
    pub kra_pin: String,
}

impl WorkerForm {
    /// Prefills the form from an existing worker.
    pub fn from_worker(worker: &Worker) -> Self {
        Self {
            full_name: worker.full_name.clone(),
            email: worker.email.clone(),
            phone: worker.phone.clone(),
            pay_frequency: Some(worker.pay_frequency),
            rate: Some(worker.rate),
            team: worker.team.clone().unwrap_or_default(),
            position_uuid: worker.position_uuid.to_string(),
            national_id: worker.national_id.clone().unwrap_or_default(),
            kra_pin: worker.kra_pin.clone().unwrap_or_default(),
        }
    }

    /// Validates and builds a create payload.
    pub fn to_create_request(&self) -> Result<CreateWorkerRequest, FieldErrors> {
        self.validate()?;
        let (Some(pay_frequency), Some(rate)) = (self.pay_frequency, self.rate) else {
            return Err(FieldErrors::new());
        };
        Ok(CreateWorkerRequest {
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            pay_frequency,
            rate,
            national_id: optional(&self.national_id),
            kra_pin: optional(&self.kra_pin),
            team: optional(&self.team),
            position_uuid: self.position_uuid.trim().to_string(),
        })
    }

    /// Validates and builds an update payload carrying every field.
    pub fn to_update_request(&self) -> Result<UpdateWorkerRequest, FieldErrors> {
        self.validate()?;
        Ok(UpdateWorkerRequest {
            full_name: Some(self.full_name.trim().to_string()),
            phone: Some(self.phone.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            pay_frequency: self.pay_frequency,
            rate: self.rate,
            team: optional(&self.team),
            position_uuid: Some(self.position_uuid.trim().to_string()),
            payable: None,
            national_id: optional(&self.national_id),
            kra_pin: optional(&self.kra_pin),
        })
    }
}

impl Form for WorkerForm {
    const SUBJECT: &'static str = "Worker";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let length = self.full_name.trim().chars().count();
        if length == 0 {
            errors.insert("fullName", "Full name is required");
        } else if length > MAX_WORKER_NAME {
            errors.insert("fullName", "Name too long");
        }

        errors.check("email", validate_email("email", self.email.trim()));
        errors.check("phone", validate_phone("phone", self.phone.trim()));

        if self.pay_frequency.is_none() {
            errors.insert("payFrequency", "Pay frequency is required");
        }

        match self.rate {
            Some(rate) if rate > Decimal::ZERO => {}
            _ => errors.insert("rate", "Rate must be positive"),
        }

        if parse_uuid("positionUuid", &self.position_uuid).is_err() {
            errors.insert("positionUuid", INVALID_POSITION_SELECTION);
        }

        errors.into_result()
    }

    fn display_name(&self) -> String {
        self.full_name.trim().to_string()
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
