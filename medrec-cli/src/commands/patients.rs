//! Patient screens: add, update, delete, view all

use anyhow::Result;
use clap::Parser;
use medrec_core::models::{Gender, PatientForm};
use medrec_core::PatientRepo;

use super::{Context, OutputFormat};
use crate::ui;

#[derive(Parser, Debug)]
pub struct AddPatientArgs {
    /// Patient name (must not be blank)
    #[arg(long)]
    pub name: String,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Male, Female or Other
    #[arg(long)]
    pub gender: Gender,

    /// Contact number (exactly 10 digits)
    #[arg(long)]
    pub contact: String,

    /// Postal address
    #[arg(long, default_value = "")]
    pub address: String,
}

#[derive(Parser, Debug)]
pub struct UpdatePatientArgs {
    /// Patient ID to update
    pub id: i64,

    /// New name (omit to keep current)
    #[arg(long)]
    pub name: Option<String>,

    /// New age (omit to keep current)
    #[arg(long)]
    pub age: Option<u32>,

    /// New gender (omit to keep current)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// New contact number, exactly 10 digits (omit to keep current)
    #[arg(long)]
    pub contact: Option<String>,

    /// New address (omit to keep current)
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ListPatientsArgs {
    /// Print patient IDs only, one per line
    #[arg(long)]
    pub ids: bool,
}

#[derive(Parser, Debug)]
pub struct DeletePatientArgs {
    /// Patient ID to delete
    pub id: i64,
}

pub async fn run_add(ctx: &Context, args: AddPatientArgs) -> Result<()> {
    let form = PatientForm {
        name: args.name,
        age: args.age,
        gender: args.gender,
        contact: args.contact,
        address: args.address,
    };
    // Rejected input never reaches the database
    let patient = form.validate()?;

    let db = ctx.database()?;
    PatientRepo::new(&db).create(&patient).await?;
    ui::success("Patient added successfully");
    Ok(())
}

pub async fn run_update(ctx: &Context, args: UpdatePatientArgs) -> Result<()> {
    let db = ctx.database()?;
    let repo = PatientRepo::new(&db);

    let current = repo.get(args.id).await?;
    let mut form = PatientForm::try_from(&current)?;
    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(age) = args.age {
        form.age = age;
    }
    if let Some(gender) = args.gender {
        form.gender = gender;
    }
    if let Some(contact) = args.contact {
        form.contact = contact;
    }
    if let Some(address) = args.address {
        form.address = address;
    }

    let patient = form.validate()?;
    repo.update(args.id, &patient).await?;
    ui::success(format!("Patient {} updated", args.id));
    Ok(())
}

pub async fn run_delete(ctx: &Context, args: DeletePatientArgs) -> Result<()> {
    let db = ctx.database()?;
    PatientRepo::new(&db).delete(args.id).await?;
    ui::success(format!("Patient {} deleted", args.id));
    Ok(())
}

pub async fn run_list(ctx: &Context, args: ListPatientsArgs) -> Result<()> {
    let db = ctx.database()?;
    let repo = PatientRepo::new(&db);

    if args.ids {
        let ids = repo.ids().await?;
        match ctx.output {
            OutputFormat::Json => println!("{}", serde_json::to_string(&ids)?),
            OutputFormat::Human => ids.iter().for_each(|id| println!("{}", id)),
        }
        return Ok(());
    }

    let patients = repo.list().await?;
    ctx.emit_list(&patients)
}
