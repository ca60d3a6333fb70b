//! YAML snapshot rendering

use crate::error::{WealthError, WealthResult};
use crate::store::BudgetSnapshot;

/// Render a snapshot as YAML
pub fn render_snapshot_yaml(snapshot: &BudgetSnapshot) -> WealthResult<String> {
    serde_yaml::to_string(snapshot).map_err(|e| WealthError::Export(e.to_string()))
}
