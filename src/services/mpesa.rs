use std::sync::Arc;

use crate::api::{ApiClient, endpoints};
use crate::error::ConsoleResult;
use crate::models::{MpesaInitiateRequest, StatusResponse};
use crate::validation::{sanitize_optional, sanitize_text, validate_phone, validate_positive};

/// Direct mobile-money payment initiation.
#[derive(Debug, Clone)]
pub struct MpesaService {
    client: Arc<ApiClient>,
}

impl MpesaService {
    /// Creates the service over a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Initiates a payment to a phone number.
    pub async fn initiate(&self, request: MpesaInitiateRequest) -> ConsoleResult<StatusResponse> {
        let request = MpesaInitiateRequest {
            app: sanitize_text(&request.app),
            phone_number: sanitize_text(&request.phone_number),
            remarks: sanitize_optional(request.remarks.as_deref()),
            ..request
        };
        validate_phone("phoneNumber", &request.phone_number)?;
        validate_positive("amount", request.amount)?;

        let response = self.client.post(endpoints::MPESA_INITIATE, &request).await?;
        Ok(response.data.unwrap_or_default())
    }
}
