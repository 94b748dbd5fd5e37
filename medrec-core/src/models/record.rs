//! Full patient record: the patient row plus every child row

use serde::Serialize;

use super::{BillingRecord, HistoryEntry, Patient, TreatmentPlan};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    pub patient: Patient,
    pub history: Vec<HistoryEntry>,
    pub treatments: Vec<TreatmentPlan>,
    pub bills: Vec<BillingRecord>,
}

impl PatientRecord {
    /// Sum of all bills still marked pending.
    pub fn outstanding(&self) -> f64 {
        self.bills
            .iter()
            .filter(|b| b.status == super::BillingStatus::Pending)
            .map(|b| b.amount)
            .sum()
    }
}
