use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The process-wide settings document, loaded and replaced wholesale:
/// `get` returns the whole record, `update` sends the whole record back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Feature toggles by name ("billing", "pharmacy", ...). A BTreeMap
    /// keeps the panel ordering stable between loads.
    pub features: BTreeMap<String, bool>,
    pub system: SystemConfig,
    pub whatsapp: WhatsAppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub hospital_name: String,
    pub timezone: String,
    pub currency: String,
}

/// WhatsApp notification integration. Disabled by default; the backend
/// only queues notifications when `enabled` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub phone_number: String,
}
