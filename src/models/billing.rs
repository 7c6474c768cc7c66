use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::BillStatus;

/// An invoice line for a patient. Created as `pending`; the console's
/// buttons only offer pending→paid and non-cancelled→cancelled, but the
/// backend accepts any status on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub insurance_provider: String,
    #[serde(default)]
    pub insurance_claim_number: String,
    #[serde(default)]
    pub payment_method: String,
    pub status: BillStatus,
    #[serde(default)]
    pub notes: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_by: Option<Uuid>,
}
