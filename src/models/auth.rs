//! Authentication payloads and decoded user claims.

use serde::{Deserialize, Serialize};

/// Role carried in the access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Console administrator.
    Admin,
    /// Regular user who can make single payments.
    User,
}

/// Payload for `POST /auth/fund-disbursement/authenticate`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name (the user's email).
    pub username: String,
    /// Password.
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token pair returned by a successful login.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Optional server message.
    #[serde(default)]
    pub message: Option<String>,
    /// Bearer token for subsequent calls.
    pub access_token: String,
    /// Token used to obtain a new access token.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("message", &self.message)
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// User claims decoded from the access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user identifier.
    pub id: i64,
    /// Role.
    pub role: Role,
    /// Subject (the user's email).
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl User {
    /// Returns true if the claims have expired at `now` (Unix seconds).
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Returns true for administrators.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
