//! Medical history repository

use super::require_parent;
use crate::db::Database;
use crate::error::Result;
use crate::models::{HistoryEntry, NewHistoryEntry};

pub struct HistoryRepo<'a> {
    db: &'a Database,
}

impl<'a> HistoryRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Append an entry; fails with an integrity error if the patient is unknown.
    pub async fn add(&self, entry: &NewHistoryEntry) -> Result<()> {
        let affected = self
            .db
            .execute_query(
                r#"
                INSERT INTO medical_history (patient_id, diagnosis, medications, allergies)
                SELECT $1, $2, $3, $4
                WHERE EXISTS (SELECT 1 FROM patients WHERE patient_id = $1)
                "#,
                &entry.params(),
            )
            .await?;

        require_parent(affected, entry.patient_id)
    }

    pub async fn list_for_patient(&self, patient_id: i64) -> Result<Vec<HistoryEntry>> {
        self.db
            .fetch_data(
                r#"
                SELECT history_id, patient_id, diagnosis, medications, allergies
                FROM medical_history
                WHERE patient_id = $1
                ORDER BY history_id
                "#,
                &[patient_id.into()],
            )
            .await?
            .iter()
            .map(|row| HistoryEntry::from_row(row))
            .collect()
    }
}
