use anyhow::Result;
use clap::{Parser, Subcommand};

use fiberplan::cli::{
    handle_annual_command, handle_department_command, handle_export_command,
    handle_labor_command, handle_mileage_command, handle_project_command, handle_unit_command,
};
use fiberplan::config::{paths::FiberPaths, settings::Settings};
use fiberplan::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "fiberplan",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based cost estimation for fiber-optic deployment projects",
    long_about = "fiberplan tracks rate catalogs (materials, labor, mileage), assembles \
                  deployment projects from them, and computes cost breakdowns, take-rate \
                  projections and ROI figures - per project or rolled up per build year."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Department management commands
    #[command(subcommand, alias = "dept")]
    Department(fiberplan::cli::DepartmentCommands),

    /// Unit (materials/equipment) catalog commands
    #[command(subcommand)]
    Unit(fiberplan::cli::UnitCommands),

    /// Labor rate catalog commands
    #[command(subcommand)]
    Labor(fiberplan::cli::LaborCommands),

    /// Mileage rate catalog commands
    #[command(subcommand)]
    Mileage(fiberplan::cli::MileageCommands),

    /// Project management commands
    #[command(subcommand, alias = "proj")]
    Project(fiberplan::cli::ProjectCommands),

    /// Annual project rollup commands
    #[command(subcommand)]
    Annual(fiberplan::cli::AnnualCommands),

    /// Export data as JSON, YAML, or CSV
    #[command(subcommand)]
    Export(fiberplan::cli::ExportCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FiberPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Department(cmd)) => {
            handle_department_command(&storage, cmd)?;
        }
        Some(Commands::Unit(cmd)) => {
            handle_unit_command(&storage, cmd)?;
        }
        Some(Commands::Labor(cmd)) => {
            handle_labor_command(&storage, cmd)?;
        }
        Some(Commands::Mileage(cmd)) => {
            handle_mileage_command(&storage, cmd)?;
        }
        Some(Commands::Project(cmd)) => {
            handle_project_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Annual(cmd)) => {
            handle_annual_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            initialize_storage(&paths)?;
            println!("Initialized fiberplan data in {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!(
                "Default monthly income per customer: {}",
                settings.monthly_income_per_customer
            );
            println!(
                "Annual rollup default growth: {}%",
                settings.annual_growth_percentage
            );
            println!("Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("fiberplan - fiber deployment cost estimation");
            println!("Run 'fiberplan --help' to see available commands.");
            if !paths.is_initialized() {
                println!("Run 'fiberplan init' to set up the data directory.");
            }
        }
    }

    Ok(())
}
