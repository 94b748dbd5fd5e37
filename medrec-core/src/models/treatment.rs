//! Treatment plans (append-only)
//!
//! Dates are stored as ISO-8601 text so every backend sorts them the same
//! way. Start and end are not checked against each other.

use chrono::NaiveDate;
use serde::Serialize;

use super::value::{Columns, SqlValue};
use crate::error::{DataError, Result};

/// Storage format for plan dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTreatmentPlan {
    pub patient_id: i64,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewTreatmentPlan {
    pub(crate) fn params(&self) -> Vec<SqlValue> {
        vec![
            self.patient_id.into(),
            self.description.as_str().into(),
            self.start_date.format(DATE_FORMAT).to_string().into(),
            self.end_date.format(DATE_FORMAT).to_string().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreatmentPlan {
    pub id: i64,
    pub patient_id: i64,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TreatmentPlan {
    pub const COLUMNS: &'static [&'static str] =
        &["plan_id", "patient_id", "description", "start_date", "end_date"];

    pub fn from_row(row: &[SqlValue]) -> Result<Self> {
        let cols = Columns::new(row, Self::COLUMNS);
        Ok(Self {
            id: cols.int(0)?,
            patient_id: cols.int(1)?,
            description: cols.text_or_empty(2)?.to_owned(),
            start_date: parse_date(cols.text(3)?, Self::COLUMNS[3])?,
            end_date: parse_date(cols.text(4)?, Self::COLUMNS[4])?,
        })
    }
}

fn parse_date(s: &str, column: &'static str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DataError::decode(column, "YYYY-MM-DD date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_bind_as_iso_text() {
        let plan = NewTreatmentPlan {
            patient_id: 1,
            description: "Physiotherapy".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
        };
        let params = plan.params();
        assert_eq!(params[2], SqlValue::Text("2024-03-01".into()));
        assert_eq!(params[3], SqlValue::Text("2024-04-15".into()));
    }

    #[test]
    fn from_row_rejects_garbled_date() {
        let row = vec![
            SqlValue::Int(1),
            SqlValue::Int(2),
            SqlValue::Text("Rest".into()),
            SqlValue::Text("03/01/2024".into()),
            SqlValue::Text("2024-04-15".into()),
        ];
        let err = TreatmentPlan::from_row(&row).unwrap_err();
        assert!(err.to_string().contains("start_date"));
    }
}
