//! Alert and monthly history display formatting

use crate::models::{AlertSeverity, BudgetAlert, MonthlySnapshot};

use super::report::format_bar;

fn severity_marker(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Warning => "!",
        AlertSeverity::Error => "x",
        AlertSeverity::Success => "+",
        AlertSeverity::Info => "i",
    }
}

/// Format the active alerts, newest last
pub fn format_alert_list(alerts: &[BudgetAlert]) -> String {
    if alerts.is_empty() {
        return "No active alerts.".to_string();
    }

    alerts
        .iter()
        .map(|a| {
            format!(
                "[{}] {:>4}  {:<8} {}\n",
                severity_marker(a.severity),
                a.id.to_string(),
                a.severity,
                a.message
            )
        })
        .collect()
}

/// Format the monthly budget-vs-spent history as a bar chart
pub fn format_month_list(months: &[MonthlySnapshot], currency: &str) -> String {
    if months.is_empty() {
        return "No monthly history recorded.".to_string();
    }

    let scale = months
        .iter()
        .map(|m| m.budget.cents().max(m.spent.cents()))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for month in months {
        output.push_str(&format!(
            "{:<6} {:>12} {:>12}  {}\n",
            month.name,
            month.budget.format_with_symbol(currency),
            month.spent.format_with_symbol(currency),
            format_bar(month.spent.cents(), scale, 20)
        ));
    }
    output
}
