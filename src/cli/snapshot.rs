//! Snapshot export and import commands

use std::path::Path;

use clap::ValueEnum;

use crate::error::WealthResult;
use crate::export::ExportFormat;
use crate::services::{describe_import, BudgetService};
use crate::storage::Storage;

/// Export format accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    #[default]
    Json,
    Yaml,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Yaml => ExportFormat::Yaml,
        }
    }
}

/// Export the budget to a file
pub fn handle_export_command(
    storage: &Storage,
    output: Option<&Path>,
    format: FormatArg,
) -> WealthResult<()> {
    let service = BudgetService::load(storage)?;
    let path = service.export(output, format.into())?;
    println!("Exported budget to {}", path.display());
    Ok(())
}

/// Import a JSON snapshot into the budget
pub fn handle_import_command(storage: &Storage, path: &Path) -> WealthResult<()> {
    let mut service = BudgetService::load(storage)?;
    let summary = service.import(path)?;

    if summary.changed_anything() {
        println!("Imported {}", describe_import(&summary));
    } else {
        println!("Nothing to import in {}", path.display());
    }
    Ok(())
}
