//! Pharmacy inventory endpoints: list/create/update, no delete.

use serde::Serialize;
use uuid::Uuid;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::PharmacyItem;

/// Fields accepted by inventory create and update.
#[derive(Debug, Clone, Serialize)]
pub struct PharmacyItemPayload {
    pub name: String,
    pub generic_name: String,
    pub category: String,
    pub stock_quantity: u32,
    pub unit_price: f64,
    pub manufacturer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<chrono::NaiveDate>,
    pub description: String,
}

impl ApiClient {
    /// `GET /api/pharmacy`
    pub async fn pharmacy_items(&self) -> Result<Vec<PharmacyItem>, ApiError> {
        self.get("/api/pharmacy").await
    }

    /// `POST /api/pharmacy`
    pub async fn create_pharmacy_item(
        &self,
        payload: &PharmacyItemPayload,
    ) -> Result<PharmacyItem, ApiError> {
        self.post("/api/pharmacy", payload).await
    }

    /// `PUT /api/pharmacy/{id}`
    pub async fn update_pharmacy_item(
        &self,
        id: Uuid,
        payload: &PharmacyItemPayload,
    ) -> Result<PharmacyItem, ApiError> {
        self.put(&format!("/api/pharmacy/{id}"), payload).await
    }
}
