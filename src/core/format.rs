use crate::core::dataset::ProductRecord;

/// Sentinel rendered for an absent or non-numeric quantity.
pub const NOT_AVAILABLE: &str = "n/a";

/// Zero-padded 6-digit HS6 code string.
#[must_use]
pub fn hs6_code(code: u32) -> String {
    format!("{code:06}")
}

/// Short axis label for a record.
///
/// A name with a colon yields the trimmed substring before the first
/// colon; otherwise the first whitespace-delimited token. A missing name
/// (or an empty result) falls back to the zero-padded HS6 code.
#[must_use]
pub fn short_label(record: &ProductRecord) -> String {
    let Some(name) = record
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
    else {
        return hs6_code(record.code);
    };

    let label = match name.split_once(':') {
        Some((head, _)) => head.trim(),
        None => name.split_whitespace().next().unwrap_or(""),
    };

    if label.is_empty() {
        hs6_code(record.code)
    } else {
        label.to_owned()
    }
}

/// Trade value as a thousands-separated two-decimal number with the
/// thousand-USD `k` suffix, e.g. `1234.5` → `"1,234.50k"`.
#[must_use]
pub fn format_value_kusd(value: f64) -> String {
    format!("{}k", group_thousands(&format!("{value:.2}")))
}

/// Axis tick variant of [`format_value_kusd`] without decimals.
#[must_use]
pub fn format_axis_value_kusd(value: f64) -> String {
    format!("{}k", group_thousands(&format!("{value:.0}")))
}

/// Quantity in metric tons, or [`NOT_AVAILABLE`] when absent.
#[must_use]
pub fn format_quantity_tons(quantity: Option<f64>) -> String {
    match quantity {
        Some(q) if q.is_finite() => format!("{} tons", group_thousands(&format!("{q:.0}"))),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(formatted.len() + digits / 3 + 1);
    grouped.push_str(sign);
    for (offset, ch) in int_part.chars().enumerate() {
        if offset > 0 && (digits - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
