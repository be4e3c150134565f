use std::sync::Arc;

use crate::api::{ApiClient, endpoints};
use crate::error::ConsoleResult;
use crate::models::{
    CreatePayPeriodRequest, Page, PayPeriod, PayrollSearchParams, StatusResponse,
    UpdatePayPeriodRequest,
};
use crate::validation::{parse_uuid, sanitize_optional, validate_date_range};

/// Pay period lifecycle: CRUD, search, approval, locking, item generation
/// and CSV export.
///
/// Status transitions are enforced by the service; this client only issues the
/// calls.
#[derive(Debug, Clone)]
pub struct PayrollService {
    client: Arc<ApiClient>,
}

impl PayrollService {
    /// Creates the service over a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists every pay period.
    pub async fn list(&self) -> ConsoleResult<Vec<PayPeriod>> {
        let response = self.client.get(endpoints::PAY_PERIODS).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Fetches one pay period.
    pub async fn get(&self, uuid: &str) -> ConsoleResult<PayPeriod> {
        let path = endpoints::pay_period(&parse_uuid("uuid", uuid)?);
        self.client.get(&path).await?.into_data(&path)
    }

    /// Searches pay periods; unset parameters are left off the query.
    pub async fn search(&self, params: &PayrollSearchParams) -> ConsoleResult<Page<PayPeriod>> {
        let params = PayrollSearchParams {
            q: sanitize_optional(params.q.as_deref()),
            ..params.clone()
        };
        self.client
            .get_with_query(endpoints::PAY_PERIODS_SEARCH, &params)
            .await?
            .into_data(endpoints::PAY_PERIODS_SEARCH)
    }

    /// Creates a pay period. The start date must precede the end date.
    pub async fn create(&self, request: CreatePayPeriodRequest) -> ConsoleResult<PayPeriod> {
        validate_date_range(request.start_date, request.end_date)?;
        let request = CreatePayPeriodRequest {
            label: sanitize_optional(request.label.as_deref()),
            ..request
        };

        self.client
            .post(endpoints::PAY_PERIODS, &request)
            .await?
            .into_data(endpoints::PAY_PERIODS)
    }

    /// Replaces a pay period (`PUT`).
    ///
    /// The date range is only checked when both ends are supplied.
    pub async fn update(
        &self,
        uuid: &str,
        request: UpdatePayPeriodRequest,
    ) -> ConsoleResult<PayPeriod> {
        let path = endpoints::pay_period(&parse_uuid("uuid", uuid)?);
        if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
            validate_date_range(start, end)?;
        }
        let request = UpdatePayPeriodRequest {
            label: sanitize_optional(request.label.as_deref()),
            ..request
        };

        self.client.put(&path, &request).await?.into_data(&path)
    }

    /// Deletes a pay period.
    pub async fn delete(&self, uuid: &str) -> ConsoleResult<()> {
        let path = endpoints::pay_period(&parse_uuid("uuid", uuid)?);
        self.client.delete(&path).await?;
        Ok(())
    }

    /// Approves a pay period.
    pub async fn approve(&self, uuid: &str) -> ConsoleResult<PayPeriod> {
        let path = endpoints::approve_pay_period(&parse_uuid("uuid", uuid)?);
        self.client.post_empty(&path).await?.into_data(&path)
    }

    /// Locks an approved pay period.
    pub async fn lock(&self, uuid: &str) -> ConsoleResult<PayPeriod> {
        let path = endpoints::lock_pay_period(&parse_uuid("uuid", uuid)?);
        self.client.patch_empty(&path).await?.into_data(&path)
    }

    /// Asks the service to generate pay items for the period.
    pub async fn generate_items(&self, uuid: &str) -> ConsoleResult<StatusResponse> {
        let path = endpoints::generate_pay_items(&parse_uuid("uuid", uuid)?);
        let response = self.client.post_empty(&path).await?;
        Ok(response.data.unwrap_or_default())
    }

    /// Exports matching pay periods as CSV text.
    ///
    /// Paging parameters are ignored; the export covers every match.
    pub async fn export_csv(&self, params: &PayrollSearchParams) -> ConsoleResult<String> {
        let params = PayrollSearchParams {
            q: sanitize_optional(params.q.as_deref()),
            page: None,
            size: None,
            ..params.clone()
        };
        self.client
            .get_text_with_query(endpoints::PAY_PERIODS_CSV, &params)
            .await
    }
}
