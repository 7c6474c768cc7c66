//! Authentication endpoints and their session side effects.
//!
//! `login` and `logout` are the only operations that touch the session
//! store; everything else only reads it.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, StatusMessage};
use crate::error::ApiError;
use crate::models::UserProfile;
use crate::session::Session;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: UserProfile,
}

impl ApiClient {
    /// `POST /api/auth/login` — exchange credentials for a session.
    ///
    /// On success the token and profile are persisted before returning.
    /// On failure any previously stored session is left untouched.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ApiError> {
        let body = LoginRequest { username, password };
        let resp: LoginResponse = self
            .request(Method::POST, "/api/auth/login", Some(&body), false)
            .await?;

        let session = Session {
            token: resp.token,
            user: resp.user.clone(),
        };
        self.session_store().save(&session)?;
        tracing::debug!(username, "session established");

        Ok(resp.user)
    }

    /// `POST /api/auth/logout` — end the session.
    ///
    /// The stored session is cleared even when the server call fails; a
    /// user-initiated logout must never leave stale credentials behind.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result: Result<StatusMessage, ApiError> = self
            .request(Method::POST, "/api/auth/logout", None::<&()>, true)
            .await;

        if let Err(err) = result {
            tracing::debug!(error = %err, "logout request failed; clearing session anyway");
        }

        self.session_store().clear()?;
        Ok(())
    }

    /// `GET /api/auth/me` — the profile behind the stored token.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        self.get("/api/auth/me").await
    }
}
