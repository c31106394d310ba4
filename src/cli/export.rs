//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{EstimatorError, EstimatorResult};
use crate::export::{export_catalogs_csv, export_full_json, export_full_yaml, export_projects_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the full database as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full database as YAML
    Yaml {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the rate catalogs as CSV
    Catalogs {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the project list as CSV
    Projects {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn with_writer<F>(output: Option<PathBuf>, f: F) -> EstimatorResult<()>
where
    F: FnOnce(&mut dyn Write) -> EstimatorResult<()>,
{
    match output {
        Some(path) => {
            let mut file =
                File::create(&path).map_err(|e| EstimatorError::Export(e.to_string()))?;
            f(&mut file)?;
            println!("Wrote export to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> EstimatorResult<()> {
    match cmd {
        ExportCommands::Json { output } => {
            with_writer(output, |mut w| export_full_json(storage, &mut w))
        }
        ExportCommands::Yaml { output } => {
            with_writer(output, |mut w| export_full_yaml(storage, &mut w))
        }
        ExportCommands::Catalogs { output } => {
            with_writer(output, |mut w| export_catalogs_csv(storage, &mut w))
        }
        ExportCommands::Projects { output } => {
            with_writer(output, |mut w| export_projects_csv(storage, &mut w))
        }
    }
}
