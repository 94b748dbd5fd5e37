//! Full patient record (four independent reads)

use super::{BillingRepo, HistoryRepo, PatientRepo, TreatmentRepo};
use crate::db::Database;
use crate::error::Result;
use crate::models::PatientRecord;

/// Fetch a patient and all of their child rows.
///
/// The reads are not wrapped in a transaction; a concurrent write between
/// them may show up in some sections and not others.
pub async fn full_record(db: &Database, patient_id: i64) -> Result<PatientRecord> {
    let patient = PatientRepo::new(db).get(patient_id).await?;
    let history = HistoryRepo::new(db).list_for_patient(patient_id).await?;
    let treatments = TreatmentRepo::new(db).list_for_patient(patient_id).await?;
    let bills = BillingRepo::new(db).list_for_patient(patient_id).await?;

    Ok(PatientRecord {
        patient,
        history,
        treatments,
        bills,
    })
}
