use std::sync::Arc;

use crate::api::{ApiClient, endpoints};
use crate::error::ConsoleResult;
use crate::models::{PayoutKpi, WorkerKpi};

/// Aggregate indicators computed by the service.
#[derive(Debug, Clone)]
pub struct KpiService {
    client: Arc<ApiClient>,
}

impl KpiService {
    /// Creates the service over a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Worker headcount and KYC completeness.
    pub async fn workers(&self) -> ConsoleResult<WorkerKpi> {
        self.client
            .get(endpoints::KPI_WORKERS)
            .await?
            .into_data(endpoints::KPI_WORKERS)
    }

    /// Payout counts and amounts by state.
    pub async fn payouts(&self) -> ConsoleResult<PayoutKpi> {
        self.client
            .get(endpoints::KPI_PAYOUTS)
            .await?
            .into_data(endpoints::KPI_PAYOUTS)
    }
}
