//! Treatment plan screen: append and view plans for a patient

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use medrec_core::models::NewTreatmentPlan;
use medrec_core::TreatmentRepo;

use super::Context;
use crate::ui;

#[derive(Parser, Debug)]
pub struct TreatmentArgs {
    #[command(subcommand)]
    pub command: TreatmentCommands,
}

#[derive(Subcommand, Debug)]
pub enum TreatmentCommands {
    /// Add a treatment plan
    Add(AddTreatmentArgs),
    /// Show treatment plans for a patient
    List(ListTreatmentArgs),
}

#[derive(Parser, Debug)]
pub struct AddTreatmentArgs {
    /// Patient ID
    pub patient_id: i64,

    /// Treatment description
    #[arg(long)]
    pub description: String,

    /// Start date, YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub start: Option<NaiveDate>,

    /// End date, YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub end: Option<NaiveDate>,
}

#[derive(Parser, Debug)]
pub struct ListTreatmentArgs {
    /// Patient ID
    pub patient_id: i64,
}

pub async fn run_treatment(ctx: &Context, args: TreatmentArgs) -> Result<()> {
    let db = ctx.database()?;
    let repo = TreatmentRepo::new(&db);

    match args.command {
        TreatmentCommands::Add(add) => {
            let today = Local::now().date_naive();
            repo.add(&NewTreatmentPlan {
                patient_id: add.patient_id,
                description: add.description,
                start_date: add.start.unwrap_or(today),
                end_date: add.end.unwrap_or(today),
            })
            .await?;
            ui::success("Treatment plan added");
        }
        TreatmentCommands::List(list) => {
            let plans = repo.list_for_patient(list.patient_id).await?;
            ctx.emit_list(&plans)?;
        }
    }
    Ok(())
}
