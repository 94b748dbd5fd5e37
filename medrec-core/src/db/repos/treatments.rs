//! Treatment plan repository

use super::require_parent;
use crate::db::Database;
use crate::error::Result;
use crate::models::{NewTreatmentPlan, TreatmentPlan};

pub struct TreatmentRepo<'a> {
    db: &'a Database,
}

impl<'a> TreatmentRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn add(&self, plan: &NewTreatmentPlan) -> Result<()> {
        let affected = self
            .db
            .execute_query(
                r#"
                INSERT INTO treatment_plans (patient_id, description, start_date, end_date)
                SELECT $1, $2, $3, $4
                WHERE EXISTS (SELECT 1 FROM patients WHERE patient_id = $1)
                "#,
                &plan.params(),
            )
            .await?;

        require_parent(affected, plan.patient_id)
    }

    pub async fn list_for_patient(&self, patient_id: i64) -> Result<Vec<TreatmentPlan>> {
        self.db
            .fetch_data(
                r#"
                SELECT plan_id, patient_id, description, start_date, end_date
                FROM treatment_plans
                WHERE patient_id = $1
                ORDER BY plan_id
                "#,
                &[patient_id.into()],
            )
            .await?
            .iter()
            .map(|row| TreatmentPlan::from_row(row))
            .collect()
    }
}
