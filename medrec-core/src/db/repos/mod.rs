//! Repository implementations for record access
//!
//! Each repository owns its SQL text and maps untyped rows into models.
//! Lists are ordered by primary key.

pub mod billing;
pub mod history;
pub mod patients;
pub mod record;
pub mod treatments;

pub use billing::BillingRepo;
pub use history::HistoryRepo;
pub use patients::PatientRepo;
pub use record::full_record;
pub use treatments::TreatmentRepo;

use crate::error::{DataError, Result};

/// Map an append into a child table that matched no parent patient.
pub(crate) fn require_parent(rows_affected: u64, patient_id: i64) -> Result<()> {
    if rows_affected == 0 {
        return Err(DataError::integrity(format!(
            "patient {} does not exist",
            patient_id
        )));
    }
    Ok(())
}
