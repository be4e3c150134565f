use tracing::info;

use super::{AdminConsole, keys};
use crate::error::ConsoleResult;
use crate::models::{
    BatchReceipt, DisbursementBatch, DisbursementReceipt, MpesaInitiateRequest, Page, Payout,
    PayoutKpi, SingleDisbursementRequest, StatusResponse,
};
use crate::views;

impl AdminConsole {
    /// One page of batches, newest first.
    pub async fn batches(&self, page: u32, size: u32) -> ConsoleResult<Page<DisbursementBatch>> {
        self.cache
            .fetch(&keys::batches_page(page, size), self.stale_time(), || {
                self.disbursement_service.list_batches(page, size)
            })
            .await
    }

    /// The draft batches on one page of the batch listing.
    pub async fn draft_batches(&self, page: u32, size: u32) -> ConsoleResult<Vec<DisbursementBatch>> {
        let batches = self.batches(page, size).await?;
        Ok(views::draft_batches(&batches.content)
            .into_iter()
            .cloned()
            .collect())
    }

    /// One batch with its payouts.
    pub async fn batch(&self, uuid: &str) -> ConsoleResult<DisbursementBatch> {
        self.cache
            .fetch(&keys::batch(uuid), self.stale_time(), || {
                self.disbursement_service.get_batch(uuid)
            })
            .await
    }

    /// One page of payouts.
    pub async fn payouts(&self, page: u32, size: u32) -> ConsoleResult<Page<Payout>> {
        self.cache
            .fetch(&keys::payouts_page(page, size), self.stale_time(), || {
                self.disbursement_service.list_payouts(page, size)
            })
            .await
    }

    /// Payout KPI.
    pub async fn payout_kpi(&self) -> ConsoleResult<PayoutKpi> {
        self.cache
            .fetch(&keys::payout_kpi(), self.stale_time(), || {
                self.kpi_service.payouts()
            })
            .await
    }

    /// Creates a single-worker disbursement, then invalidates batch and
    /// payout listings.
    pub async fn create_single_disbursement(
        &self,
        request: SingleDisbursementRequest,
    ) -> ConsoleResult<DisbursementReceipt> {
        let receipt = self.disbursement_service.create_single(request).await?;
        self.invalidate_disbursements();
        info!(batch_uuid = ?receipt.batch_uuid, "Single disbursement created");
        Ok(receipt)
    }

    /// Creates a multi-worker batch, then invalidates batch and payout
    /// listings.
    pub async fn create_batch_disbursement(
        &self,
        worker_uuids: &[&str],
    ) -> ConsoleResult<BatchReceipt> {
        let receipt = self.disbursement_service.create_batch(worker_uuids).await?;
        self.invalidate_disbursements();
        info!(
            batch_uuid = %receipt.batch_uuid,
            workers = worker_uuids.len(),
            "Batch disbursement created"
        );
        Ok(receipt)
    }

    /// Creates a batch from a pay period, then invalidates batch and payout
    /// listings.
    pub async fn create_batch_from_period(&self, period_uuid: &str) -> ConsoleResult<BatchReceipt> {
        let receipt = self
            .disbursement_service
            .create_from_period(period_uuid)
            .await?;
        self.invalidate_disbursements();
        info!(
            batch_uuid = %receipt.batch_uuid,
            period_uuid = %period_uuid,
            "Batch created from pay period"
        );
        Ok(receipt)
    }

    /// Sends a batch, then invalidates the listings and the batch itself.
    pub async fn send_batch(&self, uuid: &str) -> ConsoleResult<StatusResponse> {
        let status = self.disbursement_service.send_batch(uuid).await?;
        self.invalidate_disbursements();
        self.cache.invalidate(&keys::batch(uuid));
        info!(batch_uuid = %uuid, status = %status.status, "Batch sent");
        Ok(status)
    }

    /// Initiates a direct mobile-money payment, then invalidates payout
    /// listings.
    pub async fn initiate_mpesa_payment(
        &self,
        request: MpesaInitiateRequest,
    ) -> ConsoleResult<StatusResponse> {
        let status = self.mpesa_service.initiate(request).await?;
        self.cache.invalidate(&keys::payouts());
        self.cache.invalidate(&keys::payout_kpi());
        info!(status = %status.status, "Mobile-money payment initiated");
        Ok(status)
    }

    fn invalidate_disbursements(&self) {
        self.cache.invalidate(&keys::batches());
        self.cache.invalidate(&keys::payouts());
        self.cache.invalidate(&keys::payout_kpi());
    }
}
