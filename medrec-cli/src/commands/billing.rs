//! Billing screen: append and view bills for a patient

use anyhow::Result;
use clap::{Parser, Subcommand};
use medrec_core::models::{parse_amount, BillingStatus, NewBill};
use medrec_core::BillingRepo;

use super::Context;
use crate::ui;

#[derive(Parser, Debug)]
pub struct BillingArgs {
    #[command(subcommand)]
    pub command: BillingCommands,
}

#[derive(Subcommand, Debug)]
pub enum BillingCommands {
    /// Add a bill
    Add(AddBillArgs),
    /// Show bills for a patient
    List(ListBillsArgs),
}

#[derive(Parser, Debug)]
pub struct AddBillArgs {
    /// Patient ID
    pub patient_id: i64,

    /// Amount (non-negative)
    #[arg(long, value_parser = parse_amount)]
    pub amount: f64,

    /// Pending or Paid
    #[arg(long, default_value = "Pending")]
    pub status: BillingStatus,
}

#[derive(Parser, Debug)]
pub struct ListBillsArgs {
    /// Patient ID
    pub patient_id: i64,
}

pub async fn run_billing(ctx: &Context, args: BillingArgs) -> Result<()> {
    let db = ctx.database()?;
    let repo = BillingRepo::new(&db);

    match args.command {
        BillingCommands::Add(add) => {
            repo.add(&NewBill {
                patient_id: add.patient_id,
                amount: add.amount,
                status: add.status,
            })
            .await?;
            ui::success("Bill added");
        }
        BillingCommands::List(list) => {
            let bills = repo.list_for_patient(list.patient_id).await?;
            ctx.emit_list(&bills)?;
        }
    }
    Ok(())
}
