//! Shared formatting helpers for terminal output

/// Create a simple bar chart representation
pub fn format_bar(value: i64, max_value: i64, width: usize) -> String {
    if max_value <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Width of the widest name, never narrower than `min`
pub fn column_width<'a>(names: impl Iterator<Item = &'a str>, min: usize) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(min).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50, 100, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(250, 100, 4), "████");
        assert_eq!(format_bar(0, 100, 3), "░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }

    #[test]
    fn test_column_width() {
        let names = ["Rent", "Dining Out"];
        assert_eq!(column_width(names.iter().copied(), 4), 10);
        assert_eq!(column_width(std::iter::empty(), 8), 8);
    }
}
