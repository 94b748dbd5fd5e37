//! Medical history screen: append and view entries for a patient

use anyhow::Result;
use clap::{Parser, Subcommand};
use medrec_core::models::NewHistoryEntry;
use medrec_core::HistoryRepo;

use super::Context;
use crate::ui;

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommands,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Add a medical history entry
    Add(AddHistoryArgs),
    /// Show medical history for a patient
    List(ListHistoryArgs),
}

#[derive(Parser, Debug)]
pub struct AddHistoryArgs {
    /// Patient ID
    pub patient_id: i64,

    /// Diagnosis
    #[arg(long)]
    pub diagnosis: String,

    /// Medications
    #[arg(long, default_value = "")]
    pub medications: String,

    /// Allergies
    #[arg(long, default_value = "")]
    pub allergies: String,
}

#[derive(Parser, Debug)]
pub struct ListHistoryArgs {
    /// Patient ID
    pub patient_id: i64,
}

pub async fn run_history(ctx: &Context, args: HistoryArgs) -> Result<()> {
    let db = ctx.database()?;
    let repo = HistoryRepo::new(&db);

    match args.command {
        HistoryCommands::Add(add) => {
            repo.add(&NewHistoryEntry {
                patient_id: add.patient_id,
                diagnosis: add.diagnosis,
                medications: add.medications,
                allergies: add.allergies,
            })
            .await?;
            ui::success("History added");
        }
        HistoryCommands::List(list) => {
            let entries = repo.list_for_patient(list.patient_id).await?;
            ctx.emit_list(&entries)?;
        }
    }
    Ok(())
}
