//! Prescription endpoints: list and create only. Issued prescriptions are
//! immutable through this API.

use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Prescription, PrescriptionLine};

/// Fields accepted by prescription create. `doctor_id` is stamped
/// server-side from the authenticated user.
#[derive(Debug, Clone, Serialize)]
pub struct PrescriptionPayload {
    pub patient_id: Uuid,
    pub medicines: Vec<PrescriptionLine>,
    pub diagnosis: String,
    pub notes: String,
}

impl ApiClient {
    /// `GET /api/prescriptions`
    pub async fn prescriptions(&self) -> Result<Vec<Prescription>, ApiError> {
        self.get("/api/prescriptions").await
    }

    /// `POST /api/prescriptions`
    pub async fn create_prescription(
        &self,
        payload: &PrescriptionPayload,
    ) -> Result<Prescription, ApiError> {
        self.post("/api/prescriptions", payload).await
    }
}
