//! Patient repository
//!
//! The only entity with update and delete. Deleting does not touch child
//! rows in the history, treatment or billing tables.

use crate::db::Database;
use crate::error::{DataError, Result};
use crate::models::{NewPatient, Patient};

const SELECT_PATIENTS: &str = r#"
    SELECT patient_id, name, age, gender, contact, address
    FROM patients
"#;

pub struct PatientRepo<'a> {
    db: &'a Database,
}

impl<'a> PatientRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a validated patient.
    pub async fn create(&self, patient: &NewPatient) -> Result<()> {
        self.db
            .execute_query(
                r#"
                INSERT INTO patients (name, age, gender, contact, address)
                VALUES ($1, $2, $3, $4, $5)
                "#,
                &patient.params(),
            )
            .await?;

        tracing::info!("patient added");
        Ok(())
    }

    /// All patients.
    pub async fn list(&self) -> Result<Vec<Patient>> {
        let sql = format!("{SELECT_PATIENTS} ORDER BY patient_id");
        self.db
            .fetch_data(&sql, &[])
            .await?
            .iter()
            .map(|row| Patient::from_row(row))
            .collect()
    }

    /// Patient ids only, for pickers.
    pub async fn ids(&self) -> Result<Vec<i64>> {
        let rows = self
            .db
            .fetch_data("SELECT patient_id FROM patients ORDER BY patient_id", &[])
            .await?;

        rows.iter()
            .map(|row| {
                row.first()
                    .and_then(|v| v.as_i64())
                    .ok_or_else(|| DataError::decode("patient_id", "integer"))
            })
            .collect()
    }

    pub async fn get(&self, id: i64) -> Result<Patient> {
        let sql = format!("{SELECT_PATIENTS} WHERE patient_id = $1");
        let rows = self.db.fetch_data(&sql, &[id.into()]).await?;

        match rows.first() {
            Some(row) => Patient::from_row(row),
            None => Err(DataError::NotFound {
                resource: "patient",
                id,
            }),
        }
    }

    /// Overwrite every field of an existing patient.
    pub async fn update(&self, id: i64, patient: &NewPatient) -> Result<()> {
        let mut params = patient.params();
        params.push(id.into());

        let affected = self
            .db
            .execute_query(
                r#"
                UPDATE patients
                SET name = $1, age = $2, gender = $3, contact = $4, address = $5
                WHERE patient_id = $6
                "#,
                &params,
            )
            .await?;

        if affected == 0 {
            return Err(DataError::NotFound {
                resource: "patient",
                id,
            });
        }
        tracing::info!(id, "patient updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let affected = self
            .db
            .execute_query("DELETE FROM patients WHERE patient_id = $1", &[id.into()])
            .await?;

        if affected == 0 {
            return Err(DataError::NotFound {
                resource: "patient",
                id,
            });
        }
        tracing::info!(id, "patient deleted");
        Ok(())
    }
}
