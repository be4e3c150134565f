use tracing::info;

use super::{AdminConsole, keys};
use crate::error::ConsoleResult;
use crate::models::{CreatePositionRequest, Position, UpdatePositionRequest};
use crate::views;

impl AdminConsole {
    /// All positions.
    pub async fn positions(&self) -> ConsoleResult<Vec<Position>> {
        self.cache
            .fetch(&keys::positions(), self.stale_time(), || {
                self.position_service.list()
            })
            .await
    }

    /// Positions filtered by active flag; all of them when `None`.
    pub async fn positions_filtered(&self, active: Option<bool>) -> ConsoleResult<Vec<Position>> {
        let positions = self.positions().await?;
        Ok(views::positions_by_active(&positions, active)
            .into_iter()
            .cloned()
            .collect())
    }

    /// One position.
    pub async fn position(&self, uuid: &str) -> ConsoleResult<Position> {
        self.cache
            .fetch(&keys::position(uuid), self.stale_time(), || {
                self.position_service.get(uuid)
            })
            .await
    }

    /// Creates a position, then invalidates the position list.
    pub async fn create_position(&self, request: CreatePositionRequest) -> ConsoleResult<Position> {
        let position = self.position_service.create(request).await?;
        self.cache.invalidate(&keys::positions());
        info!(uuid = %position.uuid, name = %position.name, "Position created");
        Ok(position)
    }

    /// Updates a position, then invalidates the list and the position.
    pub async fn update_position(
        &self,
        uuid: &str,
        request: UpdatePositionRequest,
    ) -> ConsoleResult<Position> {
        let position = self.position_service.update(uuid, request).await?;
        self.cache.invalidate(&keys::positions());
        self.cache.invalidate(&keys::position(uuid));
        info!(uuid = %position.uuid, active = position.active, "Position updated");
        Ok(position)
    }

    /// Deletes a position, then invalidates the list and drops the position.
    pub async fn delete_position(&self, uuid: &str) -> ConsoleResult<()> {
        self.position_service.delete(uuid).await?;
        self.cache.invalidate(&keys::positions());
        self.cache.remove(&keys::position(uuid));
        info!(uuid = %uuid, "Position deleted");
        Ok(())
    }
}
