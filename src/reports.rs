//! Client-side aggregations for the reports and billing pages.
//!
//! Every computation here is a single pass over a list already fetched
//! from the backend; nothing is cached or stored.

use chrono::{Datelike, NaiveDate};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Appointment, AppointmentStatus, Bill, BillStatus, Patient};

/// Revenue totals as shown on the billing and reports pages. Cancelled
/// bills count toward `total` but toward neither `paid` nor `pending`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevenueSummary {
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
    pub paid_count: usize,
    pub pending_count: usize,
}

impl RevenueSummary {
    pub fn from_bills(bills: &[Bill]) -> Self {
        let mut summary = Self::default();
        for bill in bills {
            summary.total += bill.amount;
            match bill.status {
                BillStatus::Paid => {
                    summary.paid += bill.amount;
                    summary.paid_count += 1;
                }
                BillStatus::Pending => {
                    summary.pending += bill.amount;
                    summary.pending_count += 1;
                }
                BillStatus::Cancelled => {}
            }
        }
        summary
    }
}

/// One department's share of the appointment list.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentShare {
    pub department: String,
    pub count: usize,
    /// Percentage of all appointments, one decimal place, standard rounding.
    pub percent: f64,
}

/// Appointment counts per department, in first-seen order.
pub fn department_breakdown(appointments: &[Appointment]) -> Vec<DepartmentShare> {
    let mut shares: Vec<DepartmentShare> = Vec::new();
    for appt in appointments {
        match shares.iter_mut().find(|s| s.department == appt.department) {
            Some(share) => share.count += 1,
            None => shares.push(DepartmentShare {
                department: appt.department.clone(),
                count: 1,
                percent: 0.0,
            }),
        }
    }

    let total = appointments.len();
    if total > 0 {
        for share in &mut shares {
            let raw = share.count as f64 / total as f64 * 100.0;
            share.percent = (raw * 10.0).round() / 10.0;
        }
    }
    shares
}

/// Completed/cancelled tallies for the reports header cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppointmentStatusCounts {
    pub completed: usize,
    pub cancelled: usize,
}

pub fn appointment_status_counts(appointments: &[Appointment]) -> AppointmentStatusCounts {
    let mut counts = AppointmentStatusCounts::default();
    for appt in appointments {
        match appt.status {
            AppointmentStatus::Completed => counts.completed += 1,
            AppointmentStatus::Cancelled => counts.cancelled += 1,
            AppointmentStatus::Scheduled => {}
        }
    }
    counts
}

/// Patients registered in the same calendar month as `today`. The date is
/// a parameter so callers own the clock.
pub fn new_patients_in_month(patients: &[Patient], today: NaiveDate) -> usize {
    patients
        .iter()
        .filter(|p| {
            let created = p.created_at.date();
            created.year() == today.year() && created.month() == today.month()
        })
        .count()
}

/// Everything the reports page renders from.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub billing: Vec<Bill>,
}

/// Fetch the three lists the reports page needs, concurrently.
///
/// All-or-nothing: if any fetch fails the whole load fails and no partial
/// data is returned.
pub async fn load_report_data(client: &ApiClient) -> Result<ReportData, ApiError> {
    let (patients, appointments, billing) =
        tokio::try_join!(client.patients(), client.appointments(), client.billing())?;
    Ok(ReportData {
        patients,
        appointments,
        billing,
    })
}
