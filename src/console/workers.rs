use tracing::info;

use super::{AdminConsole, keys};
use crate::error::ConsoleResult;
use crate::models::{CreateWorkerRequest, Page, UpdateWorkerRequest, Worker, WorkerKpi};

impl AdminConsole {
    /// All workers.
    pub async fn workers(&self) -> ConsoleResult<Vec<Worker>> {
        self.cache
            .fetch(&keys::all_workers(), self.stale_time(), || {
                self.worker_service.list()
            })
            .await
    }

    /// One page of workers.
    pub async fn workers_page(&self, page: u32, size: u32) -> ConsoleResult<Page<Worker>> {
        self.cache
            .fetch(&keys::workers_page(page, size), self.stale_time(), || {
                self.worker_service.search(page, size)
            })
            .await
    }

    /// One worker.
    pub async fn worker(&self, uuid: &str) -> ConsoleResult<Worker> {
        self.cache
            .fetch(&keys::worker(uuid), self.stale_time(), || {
                self.worker_service.get(uuid)
            })
            .await
    }

    /// Worker KPI.
    pub async fn worker_kpi(&self) -> ConsoleResult<WorkerKpi> {
        self.cache
            .fetch(&keys::worker_kpi(), self.stale_time(), || {
                self.kpi_service.workers()
            })
            .await
    }

    /// Creates a worker, then invalidates the worker lists.
    pub async fn create_worker(&self, request: CreateWorkerRequest) -> ConsoleResult<Worker> {
        let worker = self.worker_service.create(request).await?;
        self.invalidate_workers();
        info!(uuid = %worker.uuid, "Worker created");
        Ok(worker)
    }

    /// Updates a worker, then invalidates the lists and the worker.
    pub async fn update_worker(
        &self,
        uuid: &str,
        request: UpdateWorkerRequest,
    ) -> ConsoleResult<Worker> {
        let worker = self.worker_service.update(uuid, request).await?;
        self.invalidate_workers();
        self.cache.invalidate(&keys::worker(uuid));
        info!(uuid = %worker.uuid, "Worker updated");
        Ok(worker)
    }

    /// Deletes a worker, then invalidates the lists and drops the worker.
    pub async fn delete_worker(&self, uuid: &str) -> ConsoleResult<()> {
        self.worker_service.delete(uuid).await?;
        self.invalidate_workers();
        self.cache.remove(&keys::worker(uuid));
        info!(uuid = %uuid, "Worker deleted");
        Ok(())
    }

    /// Sets a worker's payable flag, then invalidates the lists and the worker.
    pub async fn set_worker_payable(&self, uuid: &str, payable: bool) -> ConsoleResult<Worker> {
        let worker = self.worker_service.set_payable(uuid, payable).await?;
        self.invalidate_workers();
        self.cache.invalidate(&keys::worker(uuid));
        info!(uuid = %worker.uuid, payable, "Worker payable flag set");
        Ok(worker)
    }

    fn invalidate_workers(&self) {
        self.cache.invalidate(&keys::workers());
        self.cache.invalidate(&keys::worker_kpi());
    }
}
