//! Medical history entries (append-only)

use serde::Serialize;

use super::value::{Columns, SqlValue};
use crate::error::Result;

/// History entry to append for a patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub patient_id: i64,
    pub diagnosis: String,
    pub medications: String,
    pub allergies: String,
}

impl NewHistoryEntry {
    pub(crate) fn params(&self) -> Vec<SqlValue> {
        vec![
            self.patient_id.into(),
            self.diagnosis.as_str().into(),
            self.medications.as_str().into(),
            self.allergies.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub patient_id: i64,
    pub diagnosis: String,
    pub medications: String,
    pub allergies: String,
}

impl HistoryEntry {
    pub const COLUMNS: &'static [&'static str] =
        &["history_id", "patient_id", "diagnosis", "medications", "allergies"];

    pub fn from_row(row: &[SqlValue]) -> Result<Self> {
        let cols = Columns::new(row, Self::COLUMNS);
        Ok(Self {
            id: cols.int(0)?,
            patient_id: cols.int(1)?,
            diagnosis: cols.text_or_empty(2)?.to_owned(),
            medications: cols.text_or_empty(3)?.to_owned(),
            allergies: cols.text_or_empty(4)?.to_owned(),
        })
    }
}
