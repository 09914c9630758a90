//! Display formatting for chart axes and summary cards.

/// Formats a price as `$` plus the rounded value with thousand separators.
///
/// Mirrors what the charts show on axes and tooltips: `1234567.89` becomes
/// `"$1,234,568"`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Truncates a label for axis display, appending an ellipsis when shortened.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }

    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1_234_567.89), "$1,234,568");
        assert_eq!(format_currency(100_000.0), "$100,000");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(0.4), "$0");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn test_truncate_label_short_passthrough() {
        assert_eq!(truncate_label("Andheri", 12), "Andheri");
    }

    #[test]
    fn test_truncate_label_long() {
        assert_eq!(truncate_label("Koramangala 5th Block", 12), "Koramangala…");
    }

    #[test]
    fn test_truncate_label_multibyte() {
        // Truncation counts characters, not bytes.
        assert_eq!(truncate_label("Künzelsau-Gaisbach", 8), "Künzels…");
    }
}
