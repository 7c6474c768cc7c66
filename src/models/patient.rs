use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Gender;

/// A patient record. Referenced by id from appointments, bills and
/// prescriptions; a dangling reference renders as "Unknown" rather than
/// failing (the backend does not cascade deletes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub medical_history: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_by: Option<Uuid>,
}
