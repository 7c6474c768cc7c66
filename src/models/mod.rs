//! Typed records for every backend resource.
//!
//! Field names match the backend wire format exactly (snake_case JSON);
//! enums are closed sets, so a value outside them fails the decode instead
//! of flowing through as an untyped string.

pub mod appointment;
pub mod billing;
pub mod enums;
pub mod patient;
pub mod pharmacy;
pub mod prescription;
pub mod report;
pub mod settings;
pub mod user;

pub use appointment::Appointment;
pub use billing::Bill;
pub use enums::{AppointmentStatus, BillStatus, Gender, InvalidEnum, Role};
pub use patient::Patient;
pub use pharmacy::{PharmacyItem, StockLevel, LOW_STOCK_THRESHOLD};
pub use prescription::{Prescription, PrescriptionLine};
pub use report::DashboardReport;
pub use settings::{Settings, SystemConfig, WhatsAppConfig};
pub use user::UserProfile;
