//! Settings endpoints. A singleton document: get returns the whole record,
//! update replaces it wholesale.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Settings;

impl ApiClient {
    /// `GET /api/settings`
    pub async fn settings(&self) -> Result<Settings, ApiError> {
        self.get("/api/settings").await
    }

    /// `PUT /api/settings`
    pub async fn update_settings(&self, settings: &Settings) -> Result<Settings, ApiError> {
        self.put("/api/settings", settings).await
    }
}
