//! Shared helpers for the integration and scenario suites.

#![allow(dead_code)]

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde_json::{Value, json};

use fund_disbursement::api::ApiClient;
use fund_disbursement::config::{ClientConfig, SendBatchRoute};
use fund_disbursement::console::AdminConsole;
use fund_disbursement::models::{Role, User};
use fund_disbursement::routing::{Navigator, Route};
use fund_disbursement::session::{Session, StoredSession};

pub const POSITION_UUID: &str = "0b9f7c1e-6a2d-4f3b-9c8e-1d2a3b4c5d6e";
pub const WORKER_UUID: &str = "5d0c3b9e-2a6f-4c1e-8f0d-1b2c3d4e5f60";
pub const PERIOD_UUID: &str = "7a8b9c0d-1e2f-4a3b-8c4d-5e6f7a8b9c0d";
pub const BATCH_UUID: &str = "9e8d7c6b-5a4f-4e3d-9c2b-1a0f9e8d7c6b";

/// An admin whose token expires in an hour.
pub fn admin_user() -> User {
    let now = Utc::now().timestamp();
    User {
        id: 1,
        role: Role::Admin,
        sub: "admin@example.com".to_string(),
        iat: now,
        exp: now + 3600,
    }
}

/// An unsigned access token carrying `user` as its claims.
pub fn encode_unsigned_token(user: &User) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(user).expect("user serialises"));
    format!("{}.{}.", header, payload)
}

/// A session already holding a valid admin token.
pub fn signed_in_session() -> Arc<Session> {
    let user = admin_user();
    let session = Session::in_memory();
    session
        .establish(StoredSession {
            access_token: encode_unsigned_token(&user),
            refresh_token: None,
            user,
        })
        .expect("in-memory session accepts a token");
    Arc::new(session)
}

/// A signed-in console pointed at `base_url`.
pub fn console_for(base_url: &str) -> AdminConsole {
    console_with_route(base_url, SendBatchRoute::Send)
}

/// A signed-in console using the given batch-send route.
pub fn console_with_route(base_url: &str, route: SendBatchRoute) -> AdminConsole {
    let mut config = ClientConfig::with_base_url(base_url);
    config.send_batch_route = route;
    let navigator = Arc::new(Navigator::starting_at(Route::AdminDashboard));
    let client = ApiClient::new(config, signed_in_session(), navigator)
        .expect("client builds from default config");
    AdminConsole::new(Arc::new(client))
}

/// A successful envelope around `data`.
pub fn envelope(data: Value) -> Value {
    json!({
        "success": true,
        "responseCode": 200,
        "responseMessage": "OK",
        "message": "Success",
        "data": data,
        "timestamp": "2026-03-09T08:00:00Z",
        "requestId": "test-request"
    })
}

/// A failed envelope carrying `message`.
pub fn failure(code: u16, message: &str) -> Value {
    json!({
        "success": false,
        "responseCode": code,
        "message": message,
        "timestamp": "2026-03-09T08:00:00Z",
        "requestId": "test-request"
    })
}

/// A paged payload around `rows`.
pub fn page(rows: Vec<Value>) -> Value {
    let total = rows.len();
    json!({
        "content": rows,
        "page": 0,
        "size": 20,
        "totalElements": total,
        "totalPages": 1,
        "first": true,
        "last": true
    })
}

pub fn position_json(uuid: &str, name: &str, active: bool) -> Value {
    json!({
        "uuid": uuid,
        "name": name,
        "active": active,
        "multiplier": 1
    })
}

pub fn worker_json(uuid: &str, name: &str, payable: bool) -> Value {
    json!({
        "uuid": uuid,
        "fullName": name,
        "phone": "+254712345678",
        "email": "worker@example.com",
        "payFrequency": "WEEKLY",
        "rate": 1200,
        "status": "ACTIVE",
        "payable": payable,
        "positionUuid": POSITION_UUID
    })
}

pub fn pay_period_json(uuid: &str, status: &str) -> Value {
    json!({
        "id": 3,
        "uuid": uuid,
        "frequency": "WEEKLY",
        "startDate": "2026-03-09",
        "endDate": "2026-03-15",
        "status": status,
        "label": "Week 11",
        "version": 0
    })
}
