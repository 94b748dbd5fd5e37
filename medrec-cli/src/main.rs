//! medrec CLI - hospital records administration
//!
//! One subcommand per screen:
//! - Home, add/update/delete patient, view all patients
//! - Medical history, treatment plans and billing per patient
//! - Full patient record
//! - Schema setup (`init`) and connectivity check (`check`)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use medrec_core::MedrecConfig;

mod commands;
mod config;
mod tracing_setup;
mod ui;

use commands::{Context, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "medrec",
    author,
    version,
    about = "Hospital records administration: patients, medical history, treatment plans, billing"
)]
struct Cli {
    /// Suppress spinners (for scripts)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Database URL (postgres://... or sqlite://...), overrides config
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Config file (default: ~/.medrec/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Welcome screen
    Home,
    /// Add a new patient
    AddPatient(commands::patients::AddPatientArgs),
    /// Update an existing patient
    UpdatePatient(commands::patients::UpdatePatientArgs),
    /// Delete a patient (history, treatment and billing rows are kept)
    DeletePatient(commands::patients::DeletePatientArgs),
    /// View all patients
    Patients(commands::patients::ListPatientsArgs),
    /// Medical history (add, list)
    History(commands::history::HistoryArgs),
    /// Treatment plans (add, list)
    Treatment(commands::treatment::TreatmentArgs),
    /// Billing (add, list)
    Billing(commands::billing::BillingArgs),
    /// Complete record for one patient
    Record(commands::record::RecordArgs),
    /// Create tables if they don't exist
    Init,
    /// Check that the database is reachable
    Check,
    /// Inspect configuration (path, show)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    ui::init_quiet_mode(cli.quiet);
    let tracing_config = tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    };
    tracing_setup::init(&tracing_config).ok();

    let result = run(cli).await;
    tracing_setup::shutdown_otel();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error(&err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<MedrecConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = MedrecConfig::load_from(path)?;
            config.database.apply_env()?;
            config
        }
        None => MedrecConfig::load()?,
    };
    if let Some(url) = &cli.database_url {
        config.database.url = Some(url.clone());
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let output = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let ctx = Context::new(config.database.clone(), output);

    let result = dispatch(&ctx, &config, cli.command).await;
    ctx.close().await;
    result
}

async fn dispatch(ctx: &Context, settings: &MedrecConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Home => commands::system::run_home()?,
        Commands::AddPatient(args) => commands::patients::run_add(ctx, args).await?,
        Commands::UpdatePatient(args) => commands::patients::run_update(ctx, args).await?,
        Commands::DeletePatient(args) => commands::patients::run_delete(ctx, args).await?,
        Commands::Patients(args) => commands::patients::run_list(ctx, args).await?,
        Commands::History(args) => commands::run_history(ctx, args).await?,
        Commands::Treatment(args) => commands::run_treatment(ctx, args).await?,
        Commands::Billing(args) => commands::run_billing(ctx, args).await?,
        Commands::Record(args) => commands::run_record(ctx, args).await?,
        Commands::Init => commands::system::run_init(ctx).await?,
        Commands::Check => commands::system::run_check(ctx).await?,
        Commands::Config(args) => config::run_config(args, settings)?,
        Commands::Completions(args) => run_completions(args),
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) {
    use clap_complete::{generate, Shell as CompletionShell};

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
