//! Formatting utilities used for CLI and export outputs.

/// Money with currency suffix, e.g. "1 234.50 €".
/// Thousands separated by a space, Slovak style.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02} {currency}")
}

/// Percent with one decimal, e.g. "42.3%".
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p)
}

pub fn format_hours(h: f64) -> String {
    format!("{:.1} h", h)
}
