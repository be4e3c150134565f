use std::sync::Arc;

use tracing::info;

use crate::api::{ApiClient, endpoints};
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{LoginRequest, TokenPair, User};
use crate::routing::Route;
use crate::validation::validate_required;

/// Message used when a rejected login carries none.
pub const LOGIN_FAILED: &str = "Login failed";

/// Single-step username/password login and logout.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    /// Creates the service over a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Authenticates and establishes the session.
    ///
    /// On success the token pair and decoded user are persisted and the
    /// navigator lands on the user's dashboard.
    pub async fn login(&self, username: &str, password: &str) -> ConsoleResult<User> {
        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        validate_required("username", &request.username, 255)?;
        validate_required("password", &request.password, 255)?;

        let response = self
            .client
            .post::<_, TokenPair>(endpoints::LOGIN, &request)
            .await?;
        if !response.success {
            let message = if response.message.trim().is_empty() {
                LOGIN_FAILED.to_string()
            } else {
                response.message.clone()
            };
            return Err(ConsoleError::LoginRejected { message });
        }

        let tokens = response.into_data(endpoints::LOGIN)?;
        let user = self.client.session().establish_from_tokens(tokens)?;
        info!(user_id = user.id, role = ?user.role, "Logged in");
        self.client.navigator().navigate(Route::dashboard_for(user.role));
        Ok(user)
    }

    /// Clears the session and returns to the login screen.
    pub fn logout(&self) -> ConsoleResult<()> {
        self.client.session().teardown()?;
        self.client.navigator().redirect_to_login();
        Ok(())
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.client.session().user()
    }

    /// Returns true while a non-expired session is held.
    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }
}
