//! Patient endpoints: the one resource with the full list/get/create/
//! update/delete set.

use serde::Serialize;
use uuid::Uuid;

use super::{ApiClient, StatusMessage};
use crate::error::ApiError;
use crate::models::enums::Gender;
use crate::models::Patient;

/// Fields accepted by patient create and update. Server-assigned fields
/// (`id`, `created_at`, `created_by`) appear only on the response record.
#[derive(Debug, Clone, Serialize)]
pub struct PatientPayload {
    pub full_name: String,
    pub date_of_birth: chrono::NaiveDate,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub blood_group: String,
    pub emergency_contact: String,
    pub medical_history: String,
}

impl ApiClient {
    /// `GET /api/patients`
    pub async fn patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.get("/api/patients").await
    }

    /// `GET /api/patients/{id}`
    pub async fn patient(&self, id: Uuid) -> Result<Patient, ApiError> {
        self.get(&format!("/api/patients/{id}")).await
    }

    /// `POST /api/patients`
    pub async fn create_patient(&self, payload: &PatientPayload) -> Result<Patient, ApiError> {
        self.post("/api/patients", payload).await
    }

    /// `PUT /api/patients/{id}` — the backend merges the payload wholesale.
    pub async fn update_patient(
        &self,
        id: Uuid,
        payload: &PatientPayload,
    ) -> Result<Patient, ApiError> {
        self.put(&format!("/api/patients/{id}"), payload).await
    }

    /// `DELETE /api/patients/{id}`
    pub async fn delete_patient(&self, id: Uuid) -> Result<StatusMessage, ApiError> {
        self.delete(&format!("/api/patients/{id}")).await
    }
}
