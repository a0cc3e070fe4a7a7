//! Display helpers for currency and percentages.

/// Decimals used by [`format_percent`] callers that have no preference.
pub const DEFAULT_PERCENT_DECIMALS: usize = 2;

/// Format as US dollars with thousands separators and cents: `$1,234.50`, `-$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Like [`format_currency`] but zero and positive amounts carry a leading `+`.
pub fn format_signed_currency(amount: f64) -> String {
    let formatted = format_currency(amount);
    if formatted.starts_with('-') || !amount.is_finite() {
        formatted
    } else {
        format!("+{formatted}")
    }
}

/// Format with a fixed number of decimals and a trailing `%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Like [`format_percent`] but positive values carry a leading `+`.
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    if value > 0.0 {
        format!("+{}", format_percent(value, decimals))
    } else {
        format_percent(value, decimals)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
