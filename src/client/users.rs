//! User administration endpoints: list and create only (admin screens
//! deactivate accounts via the backend, not this API).

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::enums::Role;
use crate::models::UserProfile;

/// Fields accepted by user create. The password travels only on this
/// request; responses never echo it.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

impl ApiClient {
    /// `GET /api/users`
    pub async fn users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.get("/api/users").await
    }

    /// `POST /api/users`
    pub async fn create_user(&self, payload: &UserPayload) -> Result<UserProfile, ApiError> {
        self.post("/api/users", payload).await
    }
}
