//! Display formatting
//!
//! Converts numeric results to display strings. Rounding here is a
//! presentation concern; the calculators always return unrounded values.

/// Decimal places for monetary values
pub const CURRENCY_DECIMALS: u32 = 2;

/// Decimal places for unit/size quantities
pub const UNIT_DECIMALS: u32 = 8;

/// Round a value to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format a non-negative amount with thousands separators, e.g. `5,000.00`.
///
/// Returns an empty string for non-finite or negative input; signed values
/// (P&L) are rendered with plain fixed-precision formatting instead.
pub fn format_currency(value: f64, decimals: u32) -> String {
    if !value.is_finite() || value < 0.0 {
        return String::new();
    }
    let fixed = format!("{:.*}", decimals as usize, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

/// Format a non-negative value as a percentage string, e.g. `2.50%`
pub fn format_percentage(value: f64, decimals: u32) -> String {
    if !value.is_finite() || value < 0.0 {
        return String::new();
    }
    format!("{:.*}%", decimals as usize, value)
}

/// Format a unit quantity at size precision, e.g. `0.10000000`
pub fn format_units(value: f64) -> String {
    format!("{:.*}", UNIT_DECIMALS as usize, value)
}
