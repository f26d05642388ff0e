//! Display formatting for deal amounts.

use crate::view::VALUE_PLACEHOLDER;

/// Formats a deal value as dollars with thousands separators, keeping at
/// most three fraction digits. Absent or non-finite values render as the
/// placeholder.
pub fn format_deal_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_dollars(v),
        _ => VALUE_PLACEHOLDER.to_string(),
    }
}

fn format_dollars(value: f64) -> String {
    let abs = value.abs();
    let mut whole = abs.trunc();
    let mut fraction = ((abs - whole) * 1000.0).round();
    if fraction >= 1000.0 {
        whole += 1.0;
        fraction = 0.0;
    }

    // The sign follows the currency symbol: `$-1,500`.
    let sign = if value.is_sign_negative() { "-" } else { "" };

    let mut out = format!("${}{}", sign, group_digits(&format!("{:.0}", whole)));
    if fraction > 0.0 {
        let digits = format!("{:03}", fraction as u16);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Inserts a comma between every group of three digits.
pub fn group_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
