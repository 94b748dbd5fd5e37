//! Billing repository

use super::require_parent;
use crate::db::Database;
use crate::error::Result;
use crate::models::{BillingRecord, NewBill};

pub struct BillingRepo<'a> {
    db: &'a Database,
}

impl<'a> BillingRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn add(&self, bill: &NewBill) -> Result<()> {
        let affected = self
            .db
            .execute_query(
                r#"
                INSERT INTO billing (patient_id, amount, status)
                SELECT $1, $2, $3
                WHERE EXISTS (SELECT 1 FROM patients WHERE patient_id = $1)
                "#,
                &bill.params(),
            )
            .await?;

        require_parent(affected, bill.patient_id)
    }

    pub async fn list_for_patient(&self, patient_id: i64) -> Result<Vec<BillingRecord>> {
        self.db
            .fetch_data(
                r#"
                SELECT bill_id, patient_id, amount, status
                FROM billing
                WHERE patient_id = $1
                ORDER BY bill_id
                "#,
                &[patient_id.into()],
            )
            .await?
            .iter()
            .map(|row| BillingRecord::from_row(row))
            .collect()
    }
}
