use serde::{Deserialize, Serialize};

/// Aggregate counters computed server-side for the dashboard landing page
/// (`GET /api/reports/dashboard`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub total_patients: u64,
    pub total_appointments: u64,
    pub today_appointments: u64,
    pub total_revenue: f64,
    pub pending_bills: u64,
}
