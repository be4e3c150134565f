//! The admin console: services bound to the query cache.
//!
//! Reads go through the cache under the keys in [`keys`]. Every mutation calls
//! its service and, only once the service has accepted it, invalidates or
//! removes the keys whose data it changed. Nothing is updated optimistically.

mod disbursements;
pub mod keys;
mod payroll;
mod positions;
mod workers;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::api::ApiClient;
use crate::cache::QueryCache;
use crate::config::ClientConfig;
use crate::error::ConsoleResult;
use crate::models::{User, Worker};
use crate::routing::{Navigator, Route};
use crate::services::{
    AuthService, DisbursementService, KpiService, MpesaService, PayrollService, PositionService,
    WorkerService,
};
use crate::session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
use crate::views::{self, DashboardStats, Snapshot};

/// Page size used when a composed view needs one page of a paged listing.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Entry point for everything the admin screens do.
///
/// # Example
///
/// ```no_run
/// use fund_disbursement::config::ConfigLoader;
/// use fund_disbursement::console::AdminConsole;
///
/// # async fn run() -> fund_disbursement::error::ConsoleResult<()> {
/// let console = AdminConsole::from_config(ConfigLoader::from_env().into_config())?;
/// console.login("admin@example.com", "secret").await?;
/// let stats = console.dashboard_stats().await?;
/// println!("{} active workers", stats.active_workers);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AdminConsole {
    client: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    auth_service: AuthService,
    position_service: PositionService,
    worker_service: WorkerService,
    payroll_service: PayrollService,
    disbursement_service: DisbursementService,
    mpesa_service: MpesaService,
    kpi_service: KpiService,
}

impl AdminConsole {
    /// Creates a console over an existing client with an empty cache.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            cache: Arc::new(QueryCache::new()),
            auth_service: AuthService::new(client.clone()),
            position_service: PositionService::new(client.clone()),
            worker_service: WorkerService::new(client.clone()),
            payroll_service: PayrollService::new(client.clone()),
            disbursement_service: DisbursementService::new(client.clone()),
            mpesa_service: MpesaService::new(client.clone()),
            kpi_service: KpiService::new(client.clone()),
            client,
        }
    }

    /// Builds the whole stack from configuration.
    ///
    /// The session is hydrated from `session_path` when one is configured
    /// (in memory otherwise) and the navigator starts on the signed-in user's
    /// dashboard, or on the login screen.
    pub fn from_config(config: ClientConfig) -> ConsoleResult<Self> {
        let store: Arc<dyn SessionStore> = match &config.session_path {
            Some(path) => Arc::new(FileSessionStore::new(path)),
            None => Arc::new(MemorySessionStore::new()),
        };
        let session = Arc::new(Session::hydrate(store)?);
        let start = match session.role() {
            Some(role) if session.is_authenticated() => Route::dashboard_for(role),
            _ => Route::Login,
        };
        let navigator = Arc::new(Navigator::starting_at(start));
        info!(base_url = %config.base_url, start = %start, "Console initialised");

        let client = Arc::new(ApiClient::new(config, session, navigator)?);
        Ok(Self::new(client))
    }

    /// Returns the shared client.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Returns the query cache.
    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Returns the session.
    pub fn session(&self) -> &Arc<Session> {
        self.client.session()
    }

    /// Returns the navigator.
    pub fn navigator(&self) -> &Arc<Navigator> {
        self.client.navigator()
    }

    /// Returns the authentication service.
    pub fn auth(&self) -> &AuthService {
        &self.auth_service
    }

    /// Logs in and starts from an empty cache.
    pub async fn login(&self, username: &str, password: &str) -> ConsoleResult<User> {
        let user = self.auth_service.login(username, password).await?;
        self.cache.clear();
        Ok(user)
    }

    /// Logs out and forgets everything cached for the previous user.
    pub fn logout(&self) -> ConsoleResult<()> {
        self.cache.clear();
        self.auth_service.logout()
    }

    /// Workers with their position names resolved against the position list.
    pub async fn workers_with_positions(&self) -> ConsoleResult<Vec<Worker>> {
        let (workers, positions) = tokio::try_join!(self.workers(), self.positions())?;
        Ok(views::workers_with_positions(&workers, &positions))
    }

    /// Dashboard counts over workers, positions and pay periods.
    pub async fn dashboard_stats(&self) -> ConsoleResult<DashboardStats> {
        let (workers, positions, pay_periods) =
            tokio::try_join!(self.workers(), self.positions(), self.pay_periods())?;
        Ok(views::dashboard_stats(&workers, &positions, &pay_periods))
    }

    /// Everything the derived views need, read through the cache.
    ///
    /// Batches and payouts are the first page of `page_size` rows.
    pub async fn snapshot(&self, page_size: u32) -> ConsoleResult<Snapshot> {
        let (workers, positions, pay_periods, batches, payouts) = tokio::try_join!(
            self.workers(),
            self.positions(),
            self.pay_periods(),
            self.batches(0, page_size),
            self.payouts(0, page_size),
        )?;
        Ok(Snapshot {
            workers,
            positions,
            pay_periods,
            batches: batches.content,
            payouts: payouts.content,
        })
    }

    fn stale_time(&self) -> Duration {
        self.client.config().stale_time()
    }

    fn search_stale_time(&self) -> Duration {
        self.client.config().search_stale_time()
    }
}
