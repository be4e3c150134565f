use std::sync::Arc;

use crate::api::{ApiClient, endpoints};
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{
    BatchDisbursementRequest, BatchReceipt, DisbursementBatch, DisbursementReceipt, Page, Payout,
    SingleDisbursementRequest, StatusResponse,
};
use crate::validation::{parse_uuid, validate_positive};

/// Batch and payout operations.
///
/// Creating a batch only records it; money moves when the batch is sent.
#[derive(Debug, Clone)]
pub struct DisbursementService {
    client: Arc<ApiClient>,
}

impl DisbursementService {
    /// Creates the service over a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Creates a one-payout batch for a single worker.
    pub async fn create_single(
        &self,
        request: SingleDisbursementRequest,
    ) -> ConsoleResult<DisbursementReceipt> {
        let worker_uuid = parse_uuid("workerUuid", &request.worker_uuid)?;
        validate_positive("amount", request.amount)?;
        let request = SingleDisbursementRequest {
            worker_uuid: worker_uuid.to_string(),
            ..request
        };

        let response = self
            .client
            .post(endpoints::DISBURSEMENT_SINGLE, &request)
            .await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Creates a batch paying every listed worker.
    pub async fn create_batch(&self, worker_uuids: &[&str]) -> ConsoleResult<BatchReceipt> {
        if worker_uuids.is_empty() {
            return Err(ConsoleError::validation(
                "workerUuids",
                "Select at least one worker",
            ));
        }
        let worker_uuids = worker_uuids
            .iter()
            .map(|uuid| parse_uuid("workerUuids", uuid))
            .collect::<ConsoleResult<Vec<_>>>()?;

        self.client
            .post(
                endpoints::DISBURSEMENT_BATCH,
                &BatchDisbursementRequest { worker_uuids },
            )
            .await?
            .into_data(endpoints::DISBURSEMENT_BATCH)
    }

    /// Creates a batch from an approved pay period's items.
    pub async fn create_from_period(&self, period_uuid: &str) -> ConsoleResult<BatchReceipt> {
        let path = endpoints::batch_from_period(&parse_uuid("periodUuid", period_uuid)?);
        self.client.post_empty(&path).await?.into_data(&path)
    }

    /// Sends a draft batch to the payment rail.
    ///
    /// The route (`send` or `disburse`) comes from the client configuration.
    pub async fn send_batch(&self, batch_uuid: &str) -> ConsoleResult<StatusResponse> {
        let route = self.client.config().send_batch_route;
        let path = endpoints::send_batch(&parse_uuid("batchUuid", batch_uuid)?, route);
        let response = self.client.post_empty(&path).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Lists batches, newest first.
    pub async fn list_batches(&self, page: u32, size: u32) -> ConsoleResult<Page<DisbursementBatch>> {
        let query = [
            ("page", page.to_string()),
            ("size", size.to_string()),
            ("sortBy", "createdAt".to_string()),
            ("direction", "desc".to_string()),
        ];
        self.client
            .get_with_query(endpoints::BATCHES_SEARCH, &query)
            .await?
            .into_data(endpoints::BATCHES_SEARCH)
    }

    /// Fetches one batch with its payouts.
    pub async fn get_batch(&self, batch_uuid: &str) -> ConsoleResult<DisbursementBatch> {
        let path = endpoints::batch(&parse_uuid("batchUuid", batch_uuid)?);
        self.client.get(&path).await?.into_data(&path)
    }

    /// Lists payouts across all batches.
    pub async fn list_payouts(&self, page: u32, size: u32) -> ConsoleResult<Page<Payout>> {
        self.client
            .get_with_query(endpoints::PAYOUTS, &[("page", page), ("size", size)])
            .await?
            .into_data(endpoints::PAYOUTS)
    }
}
