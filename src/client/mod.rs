//! HTTP client for the hospital backend.
//!
//! One method per backend resource-action pair, all funneled through a
//! single `request` helper that owns URL construction, bearer-token
//! injection, JSON bodies, and error normalization. One attempt per call:
//! no retries, no configured timeout, no request de-duplication.

pub mod appointments;
pub mod auth;
pub mod billing;
pub mod patients;
pub mod pharmacy;
pub mod prescriptions;
pub mod reports;
pub mod settings;
pub mod users;

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ApiError;
use crate::session::SessionStore;

/// Acknowledgement body for delete/logout style endpoints
/// (`{"message": "..."}`).
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

/// Liveness payload from `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Client for the hospital backend API.
///
/// Cheap to clone the underlying `reqwest::Client`; the session store is
/// shared so login in one place is visible to every caller holding the
/// same store.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Client against an explicit base URL.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: config::normalize_base_url(&base_url.into()),
            http: reqwest::Client::new(),
            store,
        }
    }

    /// Client against the configured base URL (env var, then default).
    pub fn from_env(store: Arc<dyn SessionStore>) -> Self {
        Self::new(config::api_base_url(), store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store this client reads tokens from.
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Unauthenticated liveness probe.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.request(Method::GET, "/api/health", None::<&()>, false)
            .await
    }

    /// Issue one request and normalize the outcome.
    ///
    /// When `requires_auth` is set and a token is stored, the bearer header
    /// is attached; with no stored token the header is omitted entirely and
    /// the server's 401 comes back as a normal `Http` error.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        requires_auth: bool,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method.clone(), &url);

        if requires_auth {
            if let Some(session) = self.store.current() {
                req = req.bearer_auth(&session.token);
            }
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|err| {
            tracing::debug!(%method, %url, error = %err, "request did not complete");
            ApiError::Network(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &text);
            tracing::debug!(%method, %url, status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None::<&()>, true).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), true).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body), true).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None::<&()>, true).await
    }
}
