use std::sync::Arc;

use crate::api::{ApiClient, endpoints};
use crate::error::ConsoleResult;
use crate::models::{CreatePositionRequest, Position, UpdatePositionRequest};
use crate::validation::{
    parse_uuid, sanitize_optional, sanitize_text, validate_multiplier, validate_required,
};

/// Longest accepted position name.
pub const MAX_POSITION_NAME: usize = 100;

/// Position CRUD.
#[derive(Debug, Clone)]
pub struct PositionService {
    client: Arc<ApiClient>,
}

impl PositionService {
    /// Creates the service over a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists every position, active or not.
    pub async fn list(&self) -> ConsoleResult<Vec<Position>> {
        let response = self.client.get(endpoints::POSITIONS).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Fetches one position.
    pub async fn get(&self, uuid: &str) -> ConsoleResult<Position> {
        let path = endpoints::position(&parse_uuid("uuid", uuid)?);
        self.client.get(&path).await?.into_data(&path)
    }

    /// Creates a position.
    ///
    /// The name and description are sanitised; a multiplier other than 0 or 1
    /// is rejected before any request is made.
    pub async fn create(&self, request: CreatePositionRequest) -> ConsoleResult<Position> {
        let request = CreatePositionRequest {
            name: sanitize_text(&request.name),
            description: sanitize_optional(request.description.as_deref()),
            ..request
        };
        validate_required("name", &request.name, MAX_POSITION_NAME)?;
        if let Some(multiplier) = request.multiplier {
            validate_multiplier(multiplier)?;
        }

        self.client
            .post(endpoints::POSITIONS, &request)
            .await?
            .into_data(endpoints::POSITIONS)
    }

    /// Applies a partial update (`PATCH`).
    pub async fn update(
        &self,
        uuid: &str,
        request: UpdatePositionRequest,
    ) -> ConsoleResult<Position> {
        let path = endpoints::position(&parse_uuid("uuid", uuid)?);
        let request = UpdatePositionRequest {
            name: sanitize_optional(request.name.as_deref()),
            description: sanitize_optional(request.description.as_deref()),
            ..request
        };
        if let Some(name) = &request.name {
            validate_required("name", name, MAX_POSITION_NAME)?;
        }
        if let Some(multiplier) = request.multiplier {
            validate_multiplier(multiplier)?;
        }

        self.client.patch(&path, &request).await?.into_data(&path)
    }

    /// Deletes a position.
    pub async fn delete(&self, uuid: &str) -> ConsoleResult<()> {
        let path = endpoints::position(&parse_uuid("uuid", uuid)?);
        self.client.delete(&path).await?;
        Ok(())
    }
}
