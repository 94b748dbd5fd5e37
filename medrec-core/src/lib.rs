//! medrec-core: data access layer for hospital records
//!
//! Patients, medical history, treatment plans and billing, stored in a
//! relational database and reached through a pooled connection provider.
//! Works against Postgres or SQLite via the sqlx `Any` driver.

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::{Backend, DatabaseConfig, MedrecConfig};
pub use db::{
    full_record, BillingRepo, ConnectionProvider, Database, HistoryRepo, PatientRepo,
    TreatmentRepo,
};
pub use error::{DataError, Result};
