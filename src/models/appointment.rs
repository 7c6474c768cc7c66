use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;

/// A scheduled visit. The backend stamps `status: "scheduled"` on create;
/// later edits may set any status — no transition rules are enforced
/// anywhere, deliberately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: NaiveDate,
    /// Wall-clock time as entered, e.g. "14:30". Kept as text because the
    /// backend stores and echoes the form value verbatim.
    pub time: String,
    pub doctor_name: String,
    pub department: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: String,
    pub status: AppointmentStatus,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_by: Option<Uuid>,
}
