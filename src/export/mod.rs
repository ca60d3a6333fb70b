//! Snapshot export rendering
//!
//! - JSON: the interchange format, readable by `wealthwise import`
//! - YAML: human-readable rendering of the same snapshot

pub mod json;
pub mod yaml;

pub use json::render_snapshot_json;
pub use yaml::render_snapshot_yaml;

use crate::error::WealthResult;
use crate::store::BudgetSnapshot;

/// Output format for a snapshot export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Conventional file name for a snapshot in this format
    pub fn file_name(&self, snapshot: &BudgetSnapshot) -> String {
        let name = snapshot.file_name();
        match self {
            Self::Json => name,
            Self::Yaml => name.replace(".json", ".yaml"),
        }
    }
}

/// Render a snapshot in the given format
pub fn render_snapshot(
    snapshot: &BudgetSnapshot,
    format: ExportFormat,
    pretty: bool,
) -> WealthResult<String> {
    match format {
        ExportFormat::Json => render_snapshot_json(snapshot, pretty),
        ExportFormat::Yaml => render_snapshot_yaml(snapshot),
    }
}
