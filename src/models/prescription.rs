use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One medicine line on a prescription. Lines have no persisted identity
/// beyond their position in the `medicines` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionLine {
    pub medicine_id: Uuid,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

/// A prescription issued to a patient. `doctor_id` is stamped server-side
/// from the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub medicines: Vec<PrescriptionLine>,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub doctor_id: Option<Uuid>,
}
