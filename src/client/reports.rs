//! Server-side report endpoint. Client-side aggregations live in
//! `crate::reports`.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::DashboardReport;

impl ApiClient {
    /// `GET /api/reports/dashboard` — aggregate counters for the landing
    /// page (admin and doctor roles only, enforced server-side).
    pub async fn dashboard_report(&self) -> Result<DashboardReport, ApiError> {
        self.get("/api/reports/dashboard").await
    }
}
