//! Home screen, schema setup and connectivity check

use anyhow::Result;
use medrec_core::db::migrations;
use medrec_core::ConnectionProvider;

use super::Context;
use crate::ui;

const WELCOME: &str = "\
Welcome to the Hospital Management System!

Manage patients, their medical history, treatment plans and billing
records. Run `medrec --help` to see every screen.

  medrec patients                 View all patients
  medrec add-patient ...          Add a new patient
  medrec record <PATIENT_ID>      Complete record for one patient";

pub fn run_home() -> Result<()> {
    println!("{}", WELCOME);
    Ok(())
}

pub async fn run_init(ctx: &Context) -> Result<()> {
    let db = ctx.database()?;
    ui::with_spinner_async("Creating tables...", migrations::run(&db)).await?;
    ui::success(format!("Schema ready on {}", db.provider().target()));
    Ok(())
}

/// Open one unpooled connection, close it, and report the outcome
pub async fn run_check(ctx: &Context) -> Result<()> {
    let target = ctx.db_config.display_target();
    ui::with_spinner_async(
        format!("Connecting to {}...", target),
        ConnectionProvider::check(&ctx.db_config),
    )
    .await?;

    ui::success(format!("Connected to {}", target));
    Ok(())
}
