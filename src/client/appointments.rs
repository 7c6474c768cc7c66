//! Appointment endpoints: list/create/update/delete.

use serde::Serialize;
use uuid::Uuid;

use super::{ApiClient, StatusMessage};
use crate::error::ApiError;
use crate::models::Appointment;

/// Fields accepted by appointment create and update. Status is stamped
/// `scheduled` server-side on create and only changed via update.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentPayload {
    pub patient_id: Uuid,
    pub date: chrono::NaiveDate,
    pub time: String,
    pub doctor_name: String,
    pub department: String,
    pub reason: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<crate::models::AppointmentStatus>,
}

impl ApiClient {
    /// `GET /api/appointments`
    pub async fn appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get("/api/appointments").await
    }

    /// `POST /api/appointments` — may queue a WhatsApp notification
    /// server-side when the integration is enabled.
    pub async fn create_appointment(
        &self,
        payload: &AppointmentPayload,
    ) -> Result<Appointment, ApiError> {
        self.post("/api/appointments", payload).await
    }

    /// `PUT /api/appointments/{id}`
    pub async fn update_appointment(
        &self,
        id: Uuid,
        payload: &AppointmentPayload,
    ) -> Result<Appointment, ApiError> {
        self.put(&format!("/api/appointments/{id}"), payload).await
    }

    /// `DELETE /api/appointments/{id}`
    pub async fn delete_appointment(&self, id: Uuid) -> Result<StatusMessage, ApiError> {
        self.delete(&format!("/api/appointments/{id}")).await
    }
}
