//! Command implementations for the medrec CLI
//!
//! One module per screen family. Commands share one lazily built
//! [`Database`] handle held by the [`Context`]; nothing outlives the
//! invocation.

pub mod billing;
pub mod history;
pub mod patients;
pub mod record;
pub mod system;
pub mod treatment;

pub use billing::run_billing;
pub use history::run_history;
pub use record::run_record;
pub use treatment::run_treatment;

use anyhow::Result;
use medrec_core::{Database, DatabaseConfig};
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::ui::{self, Tabular};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
}

/// Resolved settings shared by all commands
#[derive(Debug)]
pub struct Context {
    pub db_config: DatabaseConfig,
    pub output: OutputFormat,
    db: OnceCell<Database>,
}

impl Context {
    pub fn new(db_config: DatabaseConfig, output: OutputFormat) -> Self {
        Self {
            db_config,
            output,
            db: OnceCell::new(),
        }
    }

    /// Lazy handle; the first statement opens the connection.
    pub fn database(&self) -> Result<Database> {
        let db = self.db.get_or_try_init(|| {
            tracing::debug!(db = %self.db_config.display_target(), "using database");
            Database::connect_lazy(&self.db_config)
        })?;
        Ok(db.clone())
    }

    /// Shut down pooled connections, if any were ever opened.
    pub async fn close(&self) {
        if let Some(db) = self.db.get() {
            db.provider().close().await;
        }
    }

    /// Print a list either as a table or as JSON
    pub fn emit_list<T: Tabular + Serialize>(&self, items: &[T]) -> Result<()> {
        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
            OutputFormat::Human => ui::print_table(items),
        }
        Ok(())
    }
}
