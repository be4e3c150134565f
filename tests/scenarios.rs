//! End-to-end console scenarios against a stateful in-process backend.
//!
//! The backend is a small axum router holding positions, workers, pay
//! periods and batches in memory, so every read after a mutation reflects
//! what the mutation did.

mod common;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use common::console_for;
use fund_disbursement::console::{AdminConsole, DEFAULT_PAGE_SIZE};
use fund_disbursement::forms::{
    FormModal, ModalState, NotificationKind, Notifications, PositionForm,
    SingleDisbursementForm,
};
use fund_disbursement::models::{
    ApiResponse, BatchReceipt, BatchStatus, CreatePayPeriodRequest, CreatePositionRequest,
    DisbursementBatch, DisbursementReceipt, Page, PayFrequency, PayPeriod, PayPeriodStatus,
    Payout, PayoutState, Position, SingleDisbursementRequest, UpdatePositionRequest, Worker,
    WorkerStatus,
};
use fund_disbursement::views;

// =============================================================================
// Fake backend
// =============================================================================

#[derive(Default)]
struct Backend {
    positions: Vec<Position>,
    workers: Vec<Worker>,
    pay_periods: Vec<PayPeriod>,
    batches: Vec<DisbursementBatch>,
}

type Db = Arc<Mutex<Backend>>;

fn ok<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(ApiResponse::ok(data))).into_response()
}

fn rejected(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "success": false,
        "responseCode": status.as_u16(),
        "message": message,
        "timestamp": "2026-03-09T08:00:00Z",
        "requestId": "fake-backend"
    });
    (status, Json(body)).into_response()
}

async fn list_positions(State(db): State<Db>) -> Response {
    ok(StatusCode::OK, db.lock().positions.clone())
}

async fn create_position(
    State(db): State<Db>,
    Json(request): Json<CreatePositionRequest>,
) -> Response {
    let mut db = db.lock();
    if db.positions.iter().any(|p| p.name == request.name) {
        return rejected(StatusCode::CONFLICT, "Position already exists");
    }
    let position = Position {
        uuid: Uuid::new_v4(),
        name: request.name,
        active: request.active.unwrap_or(true),
        description: request.description,
        multiplier: request.multiplier,
        created_at: Some("2026-03-09T08:00:00Z".to_string()),
    };
    db.positions.push(position.clone());
    ok(StatusCode::CREATED, position)
}

async fn update_position(
    State(db): State<Db>,
    Path(uuid): Path<Uuid>,
    Json(request): Json<UpdatePositionRequest>,
) -> Response {
    let mut db = db.lock();
    let Some(position) = db.positions.iter_mut().find(|p| p.uuid == uuid) else {
        return rejected(StatusCode::NOT_FOUND, "Position not found");
    };
    if let Some(name) = request.name {
        position.name = name;
    }
    if let Some(active) = request.active {
        position.active = active;
    }
    if request.description.is_some() {
        position.description = request.description;
    }
    if request.multiplier.is_some() {
        position.multiplier = request.multiplier;
    }
    ok(StatusCode::OK, position.clone())
}

async fn list_workers(State(db): State<Db>) -> Response {
    ok(StatusCode::OK, db.lock().workers.clone())
}

async fn list_pay_periods(State(db): State<Db>) -> Response {
    ok(StatusCode::OK, db.lock().pay_periods.clone())
}

async fn create_pay_period(
    State(db): State<Db>,
    Json(request): Json<CreatePayPeriodRequest>,
) -> Response {
    let mut db = db.lock();
    let period = PayPeriod {
        id: Some(db.pay_periods.len() as i64 + 1),
        uuid: Uuid::new_v4(),
        frequency: request.frequency,
        start_date: request.start_date,
        end_date: request.end_date,
        status: PayPeriodStatus::Draft,
        label: request.label,
        created_at: None,
        updated_at: None,
        version: 0,
    };
    db.pay_periods.push(period.clone());
    ok(StatusCode::CREATED, period)
}

async fn pay_period_action(
    State(db): State<Db>,
    Path((uuid, action)): Path<(Uuid, String)>,
) -> Response {
    let mut db = db.lock();
    let Some(period) = db.pay_periods.iter_mut().find(|p| p.uuid == uuid) else {
        return rejected(StatusCode::NOT_FOUND, "Pay period not found");
    };
    match action.as_str() {
        "approve" if period.status == PayPeriodStatus::Draft => {
            period.status = PayPeriodStatus::Approved;
            period.version += 1;
            ok(StatusCode::OK, period.clone())
        }
        "approve" => rejected(StatusCode::CONFLICT, "Only draft periods can be approved"),
        "items:auto" => ok(StatusCode::OK, json!({ "status": "GENERATED" })),
        _ => rejected(StatusCode::NOT_FOUND, "Unknown action"),
    }
}

fn payout_for(worker: &Worker, batch_uuid: Uuid, amount: Decimal) -> Payout {
    Payout {
        uuid: Uuid::new_v4(),
        batch_uuid: Some(batch_uuid),
        worker_uuid: Some(worker.uuid),
        worker_name: Some(worker.full_name.clone()),
        worker_phone: Some(worker.phone.clone()),
        worker: None,
        amount,
        state: PayoutState::Pending,
        mpesa_receipt: None,
        created_at: None,
        updated_at: None,
    }
}

fn draft_batch(batch_uuid: Uuid, payouts: Vec<Payout>) -> DisbursementBatch {
    DisbursementBatch {
        batch_uuid,
        status: BatchStatus::Draft,
        payout_count: payouts.len() as u32,
        amount_total: payouts.iter().map(|p| p.amount).sum(),
        created_at: Some("2026-03-09T08:00:00Z".to_string()),
        payouts,
    }
}

async fn create_single(
    State(db): State<Db>,
    Json(request): Json<SingleDisbursementRequest>,
) -> Response {
    let mut db = db.lock();
    let worker = Uuid::parse_str(&request.worker_uuid)
        .ok()
        .and_then(|uuid| db.workers.iter().find(|w| w.uuid == uuid).cloned());
    let Some(worker) = worker else {
        return rejected(StatusCode::NOT_FOUND, "Worker not found");
    };
    let batch_uuid = Uuid::new_v4();
    let batch = draft_batch(batch_uuid, vec![payout_for(&worker, batch_uuid, request.amount)]);
    db.batches.push(batch);
    ok(
        StatusCode::CREATED,
        DisbursementReceipt {
            batch_uuid: Some(batch_uuid),
            status: Some("DRAFT".to_string()),
        },
    )
}

async fn create_from_period(State(db): State<Db>, Path(period_uuid): Path<Uuid>) -> Response {
    let mut db = db.lock();
    let approved = db
        .pay_periods
        .iter()
        .any(|p| p.uuid == period_uuid && p.status == PayPeriodStatus::Approved);
    if !approved {
        return rejected(StatusCode::CONFLICT, "Pay period is not approved");
    }
    let batch_uuid = Uuid::new_v4();
    let payouts = db
        .workers
        .iter()
        .filter(|w| w.can_be_paid())
        .map(|w| payout_for(w, batch_uuid, w.rate))
        .collect();
    db.batches.push(draft_batch(batch_uuid, payouts));
    ok(StatusCode::CREATED, BatchReceipt { batch_uuid })
}

async fn list_batches(State(db): State<Db>) -> Response {
    let mut batches = db.lock().batches.clone();
    batches.reverse();
    ok(StatusCode::OK, Page::single(batches))
}

async fn get_batch(State(db): State<Db>, Path(uuid): Path<Uuid>) -> Response {
    match db.lock().batches.iter().find(|b| b.batch_uuid == uuid) {
        Some(batch) => ok(StatusCode::OK, batch.clone()),
        None => rejected(StatusCode::NOT_FOUND, "Batch not found"),
    }
}

async fn send_batch(State(db): State<Db>, Path(uuid): Path<Uuid>) -> Response {
    let mut db = db.lock();
    let Some(batch) = db.batches.iter_mut().find(|b| b.batch_uuid == uuid) else {
        return rejected(StatusCode::NOT_FOUND, "Batch not found");
    };
    if batch.status != BatchStatus::Draft {
        return rejected(StatusCode::CONFLICT, "Batch already sent");
    }
    batch.status = BatchStatus::Sent;
    for payout in &mut batch.payouts {
        payout.state = PayoutState::Sent;
    }
    ok(StatusCode::OK, json!({ "status": "SENT" }))
}

async fn list_payouts(State(db): State<Db>) -> Response {
    let payouts: Vec<Payout> = db
        .lock()
        .batches
        .iter()
        .flat_map(|b| b.payouts.iter().cloned())
        .collect();
    ok(StatusCode::OK, Page::single(payouts))
}

fn router(db: Db) -> Router {
    Router::new()
        .route("/admin/positions", get(list_positions).post(create_position))
        .route("/admin/positions/:uuid", patch(update_position))
        .route("/admin/workers", get(list_workers))
        .route("/payroll/periods", get(list_pay_periods).post(create_pay_period))
        .route("/payroll/periods/:uuid/:action", post(pay_period_action))
        .route("/disbursements/single", post(create_single))
        .route("/disbursements/from-period/:uuid", post(create_from_period))
        .route("/disbursements/batches/search", get(list_batches))
        .route("/disbursements/payouts", get(list_payouts))
        .route("/disbursements/send/:uuid", post(send_batch))
        .route("/disbursements/:uuid", get(get_batch))
        .with_state(db)
}

async fn spawn_backend(backend: Backend) -> (AdminConsole, Db) {
    let db: Db = Arc::new(Mutex::new(backend));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let app = router(db.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (console_for(&format!("http://{}", address)), db)
}

fn worker(name: &str, rate: i64, payable: bool, status: WorkerStatus) -> Worker {
    Worker {
        uuid: Uuid::new_v4(),
        full_name: name.to_string(),
        phone: "+254712345678".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        pay_frequency: PayFrequency::Weekly,
        rate: Decimal::new(rate, 0),
        status,
        payable,
        team: None,
        national_id: None,
        kra_pin: None,
        position_uuid: Uuid::new_v4(),
        position_name: None,
    }
}

// =============================================================================
// Positions
// =============================================================================

#[tokio::test]
async fn test_deactivated_position_leaves_active_view_but_stays_listed() {
    let (console, _db) = spawn_backend(Backend::default()).await;

    let created = console
        .create_position(CreatePositionRequest {
            name: "SUPERVISOR".to_string(),
            multiplier: Some(Decimal::ONE),
            ..CreatePositionRequest::default()
        })
        .await
        .unwrap();
    assert!(created.active);

    let positions = console.positions().await.unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].name, "SUPERVISOR");

    let updated = console
        .update_position(
            &created.uuid.to_string(),
            UpdatePositionRequest {
                active: Some(false),
                ..UpdatePositionRequest::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.active);

    let positions = console.positions().await.unwrap();
    assert_eq!(positions.len(), 1);
    assert!(views::active_positions(&positions).is_empty());
    assert!(console.positions_filtered(Some(true)).await.unwrap().is_empty());
    assert_eq!(console.positions_filtered(Some(false)).await.unwrap().len(), 1);
    assert_eq!(console.positions_filtered(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_position_modal_reports_success_and_conflict() {
    let (console, _db) = spawn_backend(Backend::default()).await;
    let api = &console;
    let toasts = Notifications::new();
    let mut modal: FormModal<PositionForm> = FormModal::new();

    modal.open_create();
    modal.form_mut().name = "SUPERVISOR".to_string();
    let created = modal
        .submit(&toasts, |form, _| async move {
            api.create_position(form.to_create_request()?).await
        })
        .await;
    assert_eq!(created.map(|p| p.name).as_deref(), Some("SUPERVISOR"));
    assert_eq!(modal.state(), ModalState::Closed);
    assert_eq!(
        toasts.latest().unwrap().title,
        "Position created successfully"
    );

    modal.open_create();
    modal.form_mut().name = "SUPERVISOR".to_string();
    let duplicate = modal
        .submit(&toasts, |form, _| async move {
            api.create_position(form.to_create_request()?).await
        })
        .await;
    assert!(duplicate.is_none());
    assert_eq!(modal.state(), ModalState::Open);

    let toast = toasts.latest().unwrap();
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.title, "Failed to create position");
    assert_eq!(
        toast.message.as_deref(),
        Some("409 Conflict: Position already exists")
    );
    assert_eq!(console.positions().await.unwrap().len(), 1);
}

// =============================================================================
// Disbursements
// =============================================================================

#[tokio::test]
async fn test_single_disbursement_batch_is_sent_and_leaves_drafts() {
    let amina = worker("Amina Otieno", 1200, true, WorkerStatus::Active);
    let (console, _db) = spawn_backend(Backend {
        workers: vec![amina.clone()],
        ..Backend::default()
    })
    .await;

    assert!(console.draft_batches(0, DEFAULT_PAGE_SIZE).await.unwrap().is_empty());

    let receipt = console
        .create_single_disbursement(SingleDisbursementRequest {
            worker_uuid: amina.uuid.to_string(),
            amount: Decimal::new(500, 0),
        })
        .await
        .unwrap();
    let batch_uuid = receipt.batch_uuid.unwrap().to_string();

    let batch = console.batch(&batch_uuid).await.unwrap();
    assert_eq!(batch.status, BatchStatus::Draft);
    assert_eq!(batch.payout_count, 1);
    assert_eq!(batch.amount_total, Decimal::new(500, 0));

    let drafts = console.draft_batches(0, DEFAULT_PAGE_SIZE).await.unwrap();
    assert_eq!(drafts.len(), 1);

    let status = console.send_batch(&batch_uuid).await.unwrap();
    assert_eq!(status.status, "SENT");

    let batch = console.batch(&batch_uuid).await.unwrap();
    assert!(batch.status.is_sent());
    assert!(console.draft_batches(0, DEFAULT_PAGE_SIZE).await.unwrap().is_empty());

    let payouts = console.payouts(0, DEFAULT_PAGE_SIZE).await.unwrap();
    let summary = views::payout_summary(&payouts.content);
    assert_eq!(summary.count, 1);
    assert_eq!(summary.sent, 1);
    assert_eq!(views::format_kes(summary.total_amount), "KES 500");
}

#[tokio::test]
async fn test_single_disbursement_form_feeds_the_console() {
    let amina = worker("Amina Otieno", 1200, true, WorkerStatus::Active);
    let (console, _db) = spawn_backend(Backend {
        workers: vec![amina.clone()],
        ..Backend::default()
    })
    .await;
    let api = &console;
    let toasts = Notifications::new();
    let mut modal: FormModal<SingleDisbursementForm> = FormModal::new();

    modal.open_create();
    modal.form_mut().worker_uuid = amina.uuid.to_string();
    modal.form_mut().amount = Some(Decimal::new(750, 0));
    let receipt = modal
        .submit(&toasts, |form, _| async move {
            api.create_single_disbursement(form.to_request()?).await
        })
        .await
        .unwrap();

    assert!(receipt.batch_uuid.is_some());
    let toast = toasts.latest().unwrap();
    assert_eq!(toast.title, "Disbursement created successfully");
    assert_eq!(toast.message.as_deref(), Some("KES 750 has been created."));
}

// =============================================================================
// Payroll
// =============================================================================

#[tokio::test]
async fn test_pay_period_lifecycle_into_a_batch() {
    let (console, _db) = spawn_backend(Backend {
        workers: vec![
            worker("Amina Otieno", 1200, true, WorkerStatus::Active),
            worker("Brian Mwangi", 900, false, WorkerStatus::Active),
            worker("Chao Wanjiru", 800, true, WorkerStatus::Inactive),
        ],
        ..Backend::default()
    })
    .await;

    let period = console
        .create_pay_period(CreatePayPeriodRequest {
            frequency: PayFrequency::Weekly,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            label: Some("Week 11".to_string()),
        })
        .await
        .unwrap();
    let period_uuid = period.uuid.to_string();

    let periods = console.pay_periods().await.unwrap();
    assert_eq!(views::draft_pay_periods(&periods).len(), 1);

    // Batches can only come from approved periods.
    let error = console.create_batch_from_period(&period_uuid).await.unwrap_err();
    assert_eq!(error.status(), Some(409));

    let generated = console.generate_pay_items(&period_uuid).await.unwrap();
    assert_eq!(generated.status, "GENERATED");

    let approved = console.approve_pay_period(&period_uuid).await.unwrap();
    assert_eq!(approved.status, PayPeriodStatus::Approved);

    let periods = console.pay_periods().await.unwrap();
    assert!(views::draft_pay_periods(&periods).is_empty());
    let stats = console.dashboard_stats().await.unwrap();
    assert_eq!(stats.approved_pay_periods, 1);
    assert_eq!(stats.total_workers, 3);
    assert_eq!(stats.active_workers, 2);

    let receipt = console.create_batch_from_period(&period_uuid).await.unwrap();
    let batch = console.batch(&receipt.batch_uuid.to_string()).await.unwrap();
    assert_eq!(batch.payout_count, 1);
    assert_eq!(batch.amount_total, Decimal::new(1200, 0));

    let snapshot = console.snapshot(DEFAULT_PAGE_SIZE).await.unwrap();
    assert_eq!(snapshot.batches.len(), 1);
    assert_eq!(snapshot.payouts.len(), 1);
    assert_eq!(views::payable_workers(&snapshot.workers).len(), 1);
}
