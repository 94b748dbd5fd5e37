//! Domain models with validation at construction
//!
//! Patient input is validated when building a [`NewPatient`] from a
//! [`PatientForm`]. Stored rows are decoded from untyped [`SqlValue`] rows.

pub mod billing;
pub mod history;
pub mod patient;
pub mod record;
pub mod treatment;
pub mod validation;
pub mod value;

pub use billing::{parse_amount, BillingRecord, BillingStatus, NewBill};
pub use history::{HistoryEntry, NewHistoryEntry};
pub use patient::{ContactNumber, Gender, NewPatient, Patient, PatientForm, PatientName};
pub use record::PatientRecord;
pub use treatment::{NewTreatmentPlan, TreatmentPlan};
pub use validation::ValidationError;
pub use value::{Row, SqlValue};
