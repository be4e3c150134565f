use tracing::info;

use super::{AdminConsole, keys};
use crate::error::ConsoleResult;
use crate::models::{
    CreatePayPeriodRequest, Page, PayPeriod, PayrollSearchParams, StatusResponse,
    UpdatePayPeriodRequest,
};

impl AdminConsole {
    /// All pay periods.
    pub async fn pay_periods(&self) -> ConsoleResult<Vec<PayPeriod>> {
        self.cache
            .fetch(&keys::pay_periods(), self.stale_time(), || {
                self.payroll_service.list()
            })
            .await
    }

    /// One pay period.
    pub async fn pay_period(&self, uuid: &str) -> ConsoleResult<PayPeriod> {
        self.cache
            .fetch(&keys::pay_period(uuid), self.stale_time(), || {
                self.payroll_service.get(uuid)
            })
            .await
    }

    /// Searches pay periods. Results stay fresh for the shorter search window.
    pub async fn search_pay_periods(
        &self,
        params: &PayrollSearchParams,
    ) -> ConsoleResult<Page<PayPeriod>> {
        self.cache
            .fetch(
                &keys::pay_period_search(params),
                self.search_stale_time(),
                || self.payroll_service.search(params),
            )
            .await
    }

    /// Exports matching pay periods as CSV. Never cached.
    pub async fn export_pay_periods_csv(&self, params: &PayrollSearchParams) -> ConsoleResult<String> {
        self.payroll_service.export_csv(params).await
    }

    /// Creates a pay period, then invalidates the pay period list.
    pub async fn create_pay_period(
        &self,
        request: CreatePayPeriodRequest,
    ) -> ConsoleResult<PayPeriod> {
        let period = self.payroll_service.create(request).await?;
        self.cache.invalidate(&keys::pay_periods());
        info!(uuid = %period.uuid, "Pay period created");
        Ok(period)
    }

    /// Updates a pay period, then invalidates the list and the period.
    pub async fn update_pay_period(
        &self,
        uuid: &str,
        request: UpdatePayPeriodRequest,
    ) -> ConsoleResult<PayPeriod> {
        let period = self.payroll_service.update(uuid, request).await?;
        self.invalidate_pay_period(uuid);
        info!(uuid = %period.uuid, "Pay period updated");
        Ok(period)
    }

    /// Deletes a pay period, then invalidates the list and drops the period.
    pub async fn delete_pay_period(&self, uuid: &str) -> ConsoleResult<()> {
        self.payroll_service.delete(uuid).await?;
        self.cache.invalidate(&keys::pay_periods());
        self.cache.remove(&keys::pay_period(uuid));
        info!(uuid = %uuid, "Pay period deleted");
        Ok(())
    }

    /// Approves a pay period, then invalidates the list and the period.
    pub async fn approve_pay_period(&self, uuid: &str) -> ConsoleResult<PayPeriod> {
        let period = self.payroll_service.approve(uuid).await?;
        self.invalidate_pay_period(uuid);
        info!(uuid = %period.uuid, status = ?period.status, "Pay period approved");
        Ok(period)
    }

    /// Locks a pay period, then invalidates the list and the period.
    pub async fn lock_pay_period(&self, uuid: &str) -> ConsoleResult<PayPeriod> {
        let period = self.payroll_service.lock(uuid).await?;
        self.invalidate_pay_period(uuid);
        info!(uuid = %period.uuid, status = ?period.status, "Pay period locked");
        Ok(period)
    }

    /// Generates pay items, then invalidates the list and the period.
    pub async fn generate_pay_items(&self, uuid: &str) -> ConsoleResult<StatusResponse> {
        let status = self.payroll_service.generate_items(uuid).await?;
        self.invalidate_pay_period(uuid);
        info!(uuid = %uuid, status = %status.status, "Pay items generated");
        Ok(status)
    }

    fn invalidate_pay_period(&self, uuid: &str) {
        self.cache.invalidate(&keys::pay_periods());
        self.cache.invalidate(&keys::pay_period(uuid));
    }
}
