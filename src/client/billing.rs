//! Billing endpoints: list/create/update. There is no delete — bills are
//! cancelled via a status update, never removed.

use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Bill, BillStatus};

/// Fields accepted by bill create and update. On create the backend stamps
/// `status: "pending"`; updates may carry a new status.
#[derive(Debug, Clone, Serialize)]
pub struct BillPayload {
    pub patient_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub insurance_provider: String,
    pub insurance_claim_number: String,
    pub payment_method: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BillStatus>,
}

impl ApiClient {
    /// `GET /api/billing`
    pub async fn billing(&self) -> Result<Vec<Bill>, ApiError> {
        self.get("/api/billing").await
    }

    /// `POST /api/billing`
    pub async fn create_bill(&self, payload: &BillPayload) -> Result<Bill, ApiError> {
        self.post("/api/billing", payload).await
    }

    /// `PUT /api/billing/{id}`
    pub async fn update_bill(&self, id: Uuid, payload: &BillPayload) -> Result<Bill, ApiError> {
        self.put(&format!("/api/billing/{id}"), payload).await
    }
}
