//! HTTP client for the fund-disbursement service.
//!
//! Every call goes through [`ApiClient`], which attaches the bearer token,
//! unwraps the response envelope and turns failures into [`ConsoleError`]s.
//! A 401 or 403 from any endpoint tears down the session and sends the
//! navigator to the login screen before the error is returned.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ConsoleError, ConsoleResult, GENERIC_ERROR_MESSAGE};
use crate::models::ApiResponse;
use crate::routing::Navigator;
use crate::session::Session;

/// Thin wrapper over `reqwest` bound to one base URL and one session.
///
/// There is no retry: a failed call is reported once and left to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    session: Arc<Session>,
    navigator: Arc<Navigator>,
}

impl ApiClient {
    /// Creates a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::ConfigParseError`] if the HTTP client cannot be
    /// built from the configuration.
    pub fn new(
        config: ClientConfig,
        session: Arc<Session>,
        navigator: Arc<Navigator>,
    ) -> ConsoleResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConsoleError::ConfigParseError {
                path: config.base_url.clone(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            config,
            session,
            navigator,
        })
    }

    /// Returns the configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the session whose token is attached to requests.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Returns the navigator redirected on authentication failures.
    pub fn navigator(&self) -> &Arc<Navigator> {
        &self.navigator
    }

    /// `GET path`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ConsoleResult<ApiResponse<T>> {
        self.execute(Method::GET, path, |r| r).await
    }

    /// `GET path?query`
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ConsoleResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(Method::GET, path, |r| r.query(query)).await
    }

    /// `GET path?query`, returning the raw body instead of an envelope.
    pub async fn get_text_with_query<Q>(&self, path: &str, query: &Q) -> ConsoleResult<String>
    where
        Q: Serialize + ?Sized,
    {
        self.send(Method::GET, path, |r| r.query(query)).await
    }

    /// `POST path` with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ConsoleResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, path, |r| r.json(body)).await
    }

    /// `POST path` without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ConsoleResult<ApiResponse<T>> {
        self.execute(Method::POST, path, |r| r).await
    }

    /// `PUT path` with a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> ConsoleResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, path, |r| r.json(body)).await
    }

    /// `PATCH path` with a JSON body.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ConsoleResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PATCH, path, |r| r.json(body)).await
    }

    /// `PATCH path?query` without a body.
    pub async fn patch_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
    ) -> ConsoleResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(Method::PATCH, path, |r| r.query(query)).await
    }

    /// `PATCH path` without a body.
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ConsoleResult<ApiResponse<T>> {
        self.execute(Method::PATCH, path, |r| r).await
    }

    /// `DELETE path`, discarding any payload.
    pub async fn delete(&self, path: &str) -> ConsoleResult<ApiResponse<IgnoredAny>> {
        self.execute(Method::DELETE, path, |r| r).await
    }

    async fn execute<T, F>(
        &self,
        method: Method,
        path: &str,
        customize: F,
    ) -> ConsoleResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let body = self.send(method, path, customize).await?;
        if body.trim().is_empty() {
            return Ok(ApiResponse::empty());
        }
        serde_json::from_str(&body).map_err(|e| ConsoleError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn send<F>(&self, method: Method, path: &str, customize: F) -> ConsoleResult<String>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = format!("{}{}", self.config.normalized_base_url(), path);
        let token = self.session.access_token();
        debug!(
            method = %method,
            path = %path,
            token_present = token.is_some(),
            "Sending request"
        );

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = customize(request).send().await.map_err(|e| {
            warn!(method = %method, path = %path, error = %e, "Request did not complete");
            ConsoleError::Network {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ConsoleError::Network {
            message: e.to_string(),
        })?;

        if status.is_success() {
            info!(method = %method, path = %path, status = status.as_u16(), "Request completed");
            Ok(body)
        } else {
            Err(self.failure(&method, path, status, &body))
        }
    }

    fn failure(&self, method: &Method, path: &str, status: StatusCode, body: &str) -> ConsoleError {
        let message = server_message(body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        let reason = status.canonical_reason().unwrap_or_default().to_string();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                "Credentials rejected, clearing session"
            );
            // The in-memory session is gone even if the store could not be cleared.
            let _ = self.session.teardown();
            self.navigator.redirect_to_login();
            return ConsoleError::Unauthorized {
                status: status.as_u16(),
                reason,
                message,
            };
        }

        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            message = %message,
            "Request failed"
        );
        ConsoleError::Http {
            status: status.as_u16(),
            reason,
            message,
        }
    }
}

/// Extracts the envelope's `message` from an error body, if it has one.
fn server_message(body: &str) -> Option<String> {
    let envelope: ApiResponse<IgnoredAny> = serde_json::from_str(body).ok()?;
    let message = envelope.message.trim();
    (!message.is_empty()).then(|| message.to_string())
}
