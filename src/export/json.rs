//! JSON snapshot rendering

use crate::error::{WealthError, WealthResult};
use crate::store::BudgetSnapshot;

/// Render a snapshot as JSON
pub fn render_snapshot_json(snapshot: &BudgetSnapshot, pretty: bool) -> WealthResult<String> {
    if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    }
    .map_err(|e| WealthError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BudgetStore;

    #[test]
    fn test_rendered_json_imports_back() {
        let source = BudgetStore::with_demo_data();
        let json = render_snapshot_json(&source.export_snapshot(), false).unwrap();
        assert!(!json.contains('\n'));

        let mut target = BudgetStore::new();
        target.import_snapshot(&json).unwrap();
        assert_eq!(target.categories(), source.categories());
        assert_eq!(target.budget_total(), source.budget_total());
    }
}
