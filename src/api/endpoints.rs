//! Service paths, relative to the configured base URL.

use uuid::Uuid;

use crate::config::SendBatchRoute;

/// Login.
pub const LOGIN: &str = "/auth/fund-disbursement/authenticate";

/// Position collection.
pub const POSITIONS: &str = "/admin/positions";

/// Worker collection.
pub const WORKERS: &str = "/admin/workers";
/// Paged worker listing.
pub const WORKERS_SEARCH: &str = "/admin/workers/search";

/// Pay period collection.
pub const PAY_PERIODS: &str = "/payroll/periods";
/// Pay period search.
pub const PAY_PERIODS_SEARCH: &str = "/payroll/search";
/// Pay period CSV export.
pub const PAY_PERIODS_CSV: &str = "/payroll/periods:csv";

/// Single-worker disbursement.
pub const DISBURSEMENT_SINGLE: &str = "/disbursements/single";
/// Multi-worker disbursement.
pub const DISBURSEMENT_BATCH: &str = "/disbursements/batch";
/// Paged batch listing.
pub const BATCHES_SEARCH: &str = "/disbursements/batches/search";
/// Paged payout listing.
pub const PAYOUTS: &str = "/disbursements/payouts";

/// Mobile-money payment initiation.
pub const MPESA_INITIATE: &str = "/mpesa/initiate";

/// Worker KPI.
pub const KPI_WORKERS: &str = "/kpi/workers";
/// Payout KPI.
pub const KPI_PAYOUTS: &str = "/kpi/payouts";

/// `/admin/positions/{uuid}`
pub fn position(uuid: &Uuid) -> String {
    format!("{}/{}", POSITIONS, uuid)
}

/// `/admin/workers/{uuid}`
pub fn worker(uuid: &Uuid) -> String {
    format!("{}/{}", WORKERS, uuid)
}

/// `/admin/workers/{uuid}/payable`
pub fn worker_payable(uuid: &Uuid) -> String {
    format!("{}/{}/payable", WORKERS, uuid)
}

/// `/payroll/periods/{uuid}`
pub fn pay_period(uuid: &Uuid) -> String {
    format!("{}/{}", PAY_PERIODS, uuid)
}

/// `/payroll/periods/{uuid}/approve`
pub fn approve_pay_period(uuid: &Uuid) -> String {
    format!("{}/{}/approve", PAY_PERIODS, uuid)
}

/// `/payroll/periods/{uuid}/lock`
pub fn lock_pay_period(uuid: &Uuid) -> String {
    format!("{}/{}/lock", PAY_PERIODS, uuid)
}

/// `/payroll/periods/{uuid}/items:auto`
pub fn generate_pay_items(uuid: &Uuid) -> String {
    format!("{}/{}/items:auto", PAY_PERIODS, uuid)
}

/// `/disbursements/{uuid}`
pub fn batch(uuid: &Uuid) -> String {
    format!("/disbursements/{}", uuid)
}

/// `/disbursements/from-period/{uuid}`
pub fn batch_from_period(period_uuid: &Uuid) -> String {
    format!("/disbursements/from-period/{}", period_uuid)
}

/// `/disbursements/send/{uuid}` or `/disbursements/disburse/{uuid}`.
pub fn send_batch(uuid: &Uuid, route: SendBatchRoute) -> String {
    match route {
        SendBatchRoute::Send => format!("/disbursements/send/{}", uuid),
        SendBatchRoute::Disburse => format!("/disbursements/disburse/{}", uuid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> Uuid {
        Uuid::parse_str("6f1c2d3e-4b5a-4c6d-8e7f-90a1b2c3d4e5").unwrap()
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(
            worker_payable(&id()),
            "/admin/workers/6f1c2d3e-4b5a-4c6d-8e7f-90a1b2c3d4e5/payable"
        );
        assert_eq!(
            generate_pay_items(&id()),
            "/payroll/periods/6f1c2d3e-4b5a-4c6d-8e7f-90a1b2c3d4e5/items:auto"
        );
        assert_eq!(
            batch(&id()),
            "/disbursements/6f1c2d3e-4b5a-4c6d-8e7f-90a1b2c3d4e5"
        );
    }

    #[test]
    fn test_send_batch_follows_route() {
        assert!(send_batch(&id(), SendBatchRoute::Send).starts_with("/disbursements/send/"));
        assert!(
            send_batch(&id(), SendBatchRoute::Disburse).starts_with("/disbursements/disburse/")
        );
    }
}
