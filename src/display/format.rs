//! Formatting helpers shared by the list and quote views

use chrono::{DateTime, Utc};

/// Format an amount with a fixed number of decimals
pub fn format_amount(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount);
    // "-0" after rounding a tiny negative
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct == pct.trunc() {
        format!("{:.0}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// Format a timestamp's calendar day with a strftime pattern
pub fn format_date(timestamp: &DateTime<Utc>, pattern: &str) -> String {
    timestamp.date_naive().format(pattern).to_string()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1309.0, 0), "1309");
        assert_eq!(format_amount(1234.5, 2), "1234.50");
        assert_eq!(format_amount(-0.0001, 0), "0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(19.0), "19%");
        assert_eq!(format_percentage(12.5), "12.50%");
        assert_eq!(format_percentage(0.0), "0%");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 23, 0, 0).unwrap();
        assert_eq!(format_date(&ts, "%d-%m-%Y"), "05-03-2024");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hola", 10), "Hola");
        assert_eq!(truncate("Construcción", 8), "Const...");
        assert_eq!(truncate("Ñandú", 2), "..");
    }
}
