use std::sync::Arc;

use crate::api::{ApiClient, endpoints};
use crate::error::ConsoleResult;
use crate::models::{CreateWorkerRequest, Page, UpdateWorkerRequest, Worker};
use crate::validation::{
    parse_uuid, sanitize_optional, sanitize_text, validate_email, validate_phone,
    validate_positive, validate_required,
};

/// Longest accepted worker name.
pub const MAX_WORKER_NAME: usize = 100;

/// Worker CRUD plus the payable toggle.
#[derive(Debug, Clone)]
pub struct WorkerService {
    client: Arc<ApiClient>,
}

impl WorkerService {
    /// Creates the service over a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists every worker.
    pub async fn list(&self) -> ConsoleResult<Vec<Worker>> {
        let response = self.client.get(endpoints::WORKERS).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Fetches one page of workers.
    pub async fn search(&self, page: u32, size: u32) -> ConsoleResult<Page<Worker>> {
        self.client
            .get_with_query(endpoints::WORKERS_SEARCH, &[("page", page), ("size", size)])
            .await?
            .into_data(endpoints::WORKERS_SEARCH)
    }

    /// Fetches one worker.
    pub async fn get(&self, uuid: &str) -> ConsoleResult<Worker> {
        let path = endpoints::worker(&parse_uuid("uuid", uuid)?);
        self.client.get(&path).await?.into_data(&path)
    }

    /// Creates a worker after checking email, phone, rate and position.
    pub async fn create(&self, request: CreateWorkerRequest) -> ConsoleResult<Worker> {
        let request = CreateWorkerRequest {
            full_name: sanitize_text(&request.full_name),
            phone: sanitize_text(&request.phone),
            email: sanitize_text(&request.email),
            national_id: sanitize_optional(request.national_id.as_deref()),
            kra_pin: sanitize_optional(request.kra_pin.as_deref()),
            team: sanitize_optional(request.team.as_deref()),
            position_uuid: request.position_uuid.trim().to_string(),
            ..request
        };
        validate_required("fullName", &request.full_name, MAX_WORKER_NAME)?;
        validate_email("email", &request.email)?;
        validate_phone("phone", &request.phone)?;
        validate_positive("rate", request.rate)?;
        parse_uuid("positionUuid", &request.position_uuid)?;

        self.client
            .post(endpoints::WORKERS, &request)
            .await?
            .into_data(endpoints::WORKERS)
    }

    /// Applies a partial update (`PATCH`); only present fields are checked.
    pub async fn update(&self, uuid: &str, request: UpdateWorkerRequest) -> ConsoleResult<Worker> {
        let path = endpoints::worker(&parse_uuid("uuid", uuid)?);
        let request = UpdateWorkerRequest {
            full_name: sanitize_optional(request.full_name.as_deref()),
            phone: sanitize_optional(request.phone.as_deref()),
            email: sanitize_optional(request.email.as_deref()),
            team: sanitize_optional(request.team.as_deref()),
            national_id: sanitize_optional(request.national_id.as_deref()),
            kra_pin: sanitize_optional(request.kra_pin.as_deref()),
            position_uuid: request.position_uuid.map(|p| p.trim().to_string()),
            ..request
        };
        if let Some(name) = &request.full_name {
            validate_required("fullName", name, MAX_WORKER_NAME)?;
        }
        if let Some(email) = &request.email {
            validate_email("email", email)?;
        }
        if let Some(phone) = &request.phone {
            validate_phone("phone", phone)?;
        }
        if let Some(rate) = request.rate {
            validate_positive("rate", rate)?;
        }
        if let Some(position_uuid) = &request.position_uuid {
            parse_uuid("positionUuid", position_uuid)?;
        }

        self.client.patch(&path, &request).await?.into_data(&path)
    }

    /// Deletes a worker.
    pub async fn delete(&self, uuid: &str) -> ConsoleResult<()> {
        let path = endpoints::worker(&parse_uuid("uuid", uuid)?);
        self.client.delete(&path).await?;
        Ok(())
    }

    /// Sets the payable flag (`PATCH …/payable?payable=bool`).
    pub async fn set_payable(&self, uuid: &str, payable: bool) -> ConsoleResult<Worker> {
        let path = endpoints::worker_payable(&parse_uuid("uuid", uuid)?);
        self.client
            .patch_with_query(&path, &[("payable", payable)])
            .await?
            .into_data(&path)
    }
}
