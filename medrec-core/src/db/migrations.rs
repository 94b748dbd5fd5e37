//! Schema setup for the four record tables
//!
//! Child tables carry a plain `patient_id` column with an index, not a
//! foreign key: deleting a patient leaves its child rows in place. Inserts
//! into child tables check the parent themselves (see the repos).

use crate::config::Backend;
use crate::error::Result;

use super::Database;

pub const PATIENTS: &str = "patients";
pub const MEDICAL_HISTORY: &str = "medical_history";
pub const TREATMENT_PLANS: &str = "treatment_plans";
pub const BILLING: &str = "billing";

/// Create all tables and indexes if they don't exist yet
pub async fn run(db: &Database) -> Result<()> {
    let backend = db.provider().backend();
    tracing::info!(?backend, db = db.provider().target(), "running schema setup");

    for statement in statements(backend) {
        db.execute_query(&statement, &[]).await?;
    }

    tracing::info!("schema ready");
    Ok(())
}

fn statements(backend: Backend) -> Vec<String> {
    let (id, money) = match backend {
        Backend::Postgres => (
            "BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY",
            "DOUBLE PRECISION",
        ),
        Backend::Sqlite => ("INTEGER PRIMARY KEY AUTOINCREMENT", "REAL"),
    };

    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {PATIENTS} (
                patient_id {id},
                name TEXT NOT NULL,
                age BIGINT NOT NULL,
                gender TEXT NOT NULL CHECK (gender IN ('Male', 'Female', 'Other')),
                contact TEXT NOT NULL,
                address TEXT NOT NULL DEFAULT ''
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {MEDICAL_HISTORY} (
                history_id {id},
                patient_id BIGINT NOT NULL,
                diagnosis TEXT NOT NULL,
                medications TEXT NOT NULL,
                allergies TEXT NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {TREATMENT_PLANS} (
                plan_id {id},
                patient_id BIGINT NOT NULL,
                description TEXT NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {BILLING} (
                bill_id {id},
                patient_id BIGINT NOT NULL,
                amount {money} NOT NULL,
                status TEXT NOT NULL CHECK (status IN ('Pending', 'Paid'))
            )
            "#
        ),
        format!("CREATE INDEX IF NOT EXISTS idx_history_patient ON {MEDICAL_HISTORY} (patient_id)"),
        format!("CREATE INDEX IF NOT EXISTS idx_treatment_patient ON {TREATMENT_PLANS} (patient_id)"),
        format!("CREATE INDEX IF NOT EXISTS idx_billing_patient ON {BILLING} (patient_id)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_tables_have_no_foreign_keys() {
        for statement in statements(Backend::Postgres) {
            assert!(!statement.to_uppercase().contains("REFERENCES"));
        }
    }

    #[test]
    fn backend_specific_columns() {
        let pg = statements(Backend::Postgres).join("\n");
        assert!(pg.contains("GENERATED BY DEFAULT AS IDENTITY"));
        assert!(pg.contains("DOUBLE PRECISION"));

        let lite = statements(Backend::Sqlite).join("\n");
        assert!(lite.contains("AUTOINCREMENT"));
        assert!(lite.contains("amount REAL"));
    }
}
