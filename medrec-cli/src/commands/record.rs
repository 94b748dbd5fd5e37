//! Full patient record screen

use anyhow::Result;
use clap::Parser;
use medrec_core::full_record;

use super::{Context, OutputFormat};
use crate::ui;

#[derive(Parser, Debug)]
pub struct RecordArgs {
    /// Patient ID
    pub patient_id: i64,
}

pub async fn run_record(ctx: &Context, args: RecordArgs) -> Result<()> {
    let db = ctx.database()?;
    let record = full_record(&db, args.patient_id).await?;

    if ctx.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("Basic Info");
    ui::print_table(std::slice::from_ref(&record.patient));
    println!("\nMedical History");
    ui::print_table(&record.history);
    println!("\nTreatment Plans");
    ui::print_table(&record.treatments);
    println!("\nBilling Info");
    ui::print_table(&record.bills);
    println!("\nOutstanding: {:.2}", record.outstanding());
    Ok(())
}
