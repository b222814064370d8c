//! Display formatting for terminal output
//!
//! Provides utilities for formatting budgets and chart rows for the CLI,
//! plus the amount formatting shared with the TUI.

pub mod budget;
pub mod chart;

pub use budget::{format_budget_json, format_budget_list};
pub use chart::format_chart;

/// Decimal digits a currency is written with
pub fn minor_units(currency: &str) -> usize {
    match currency.trim().to_uppercase().as_str() {
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        "CLP" | "ISK" | "JPY" | "KRW" | "PYG" | "UGX" | "VND" | "XAF" | "XOF" => 0,
        _ => 2,
    }
}

/// Format an amount as `KWD 1,234.500`; non-finite values render as "-"
pub fn format_amount(value: f64, currency: &str) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let code = currency.trim().to_uppercase();
    let digits = minor_units(&code);
    let fixed = format!("{:.*}", digits, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut body = group_thousands(whole);
    if let Some(fraction) = fraction {
        body.push('.');
        body.push_str(fraction);
    }

    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if negative { "-" } else { "" };
    format!("{}{} {}", sign, code, body)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Optional text, or "-" when absent or blank
pub fn or_dash(text: Option<&str>) -> &str {
    match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => "-",
    }
}

/// Truncate a string to fit a column, adding "..." when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_kwd() {
        assert_eq!(format_amount(1000.0, "KWD"), "KWD 1,000.000");
        assert_eq!(format_amount(-100.0, "kwd"), "-KWD 100.000");
        assert_eq!(format_amount(0.0, "KWD"), "KWD 0.000");
        assert_eq!(format_amount(1234567.891, "KWD"), "KWD 1,234,567.891");
    }

    #[test]
    fn test_format_amount_minor_units() {
        assert_eq!(format_amount(1500.5, "USD"), "USD 1,500.50");
        assert_eq!(format_amount(1500.5, "JPY"), "JPY 1,500");
        assert_eq!(format_amount(-0.0001, "USD"), "USD 0.00");
    }

    #[test]
    fn test_format_amount_non_finite() {
        assert_eq!(format_amount(f64::NAN, "KWD"), "-");
        assert_eq!(format_amount(f64::INFINITY, "KWD"), "-");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("Cloud")), "Cloud");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Marketing", 20), "Marketing");
        assert_eq!(truncate("Marketing", 6), "Mar...");
        assert_eq!(truncate("Marketing", 2), "Ma");
    }
}
