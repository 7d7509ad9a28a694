//! Display formatting for numbers.
//!
//! Output follows the es-MX convention: `,` groups thousands and `.` marks
//! decimals. Values that cannot be displayed (NaN, infinities) render as a
//! fixed fallback string instead.

use crate::core::Roi;

/// Fallback for amounts that cannot be displayed.
pub const DEFAULT_FALLBACK: &str = "0.00";

/// Fallback for ratios that cannot be displayed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format `value` with between `min_fraction` and `max_fraction` decimals.
///
/// Trailing zeros beyond `min_fraction` are dropped. If `max_fraction` is
/// lower than `min_fraction` the minimum is lowered to match.
pub fn format_decimal(value: f64, min_fraction: usize, max_fraction: usize, fallback: &str) -> String {
    if !value.is_finite() {
        return fallback.to_string();
    }

    let min_fraction = min_fraction.min(max_fraction);
    let fixed = round_half_away(value.abs(), max_fraction);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (fixed.as_str(), ""),
    };

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_fraction {
        frac.push('0');
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{}{}", sign, group_thousands(int_part))
    } else {
        format!("{}{}.{}", sign, group_thousands(int_part), frac)
    }
}

/// Fixed-point text for a non-negative `value`, rounding exact ties up.
///
/// `{:.N}` rounds ties to even. A tie at `places` decimals exists only when
/// `value * 2^(places + 1)` is an odd integer; in that case the exact
/// expansion has `places + 1` digits ending in 5 and is incremented by hand.
fn round_half_away(value: f64, places: usize) -> String {
    let fixed = format!("{:.*}", places, value);
    let Ok(exponent) = i32::try_from(places + 1) else {
        return fixed;
    };
    let scaled = value * 2f64.powi(exponent);
    let is_tie = scaled.is_finite() && scaled < 2f64.powi(53) && scaled % 2.0 == 1.0;
    if !is_tie {
        return fixed;
    }

    let exact = format!("{:.*}", places + 1, value);
    let truncated = exact[..exact.len() - 1].trim_end_matches('.');
    increment_last_digit(truncated)
}

fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    let mut carry = true;
    for c in chars.iter_mut().rev() {
        if !carry {
            break;
        }
        match *c {
            '.' => continue,
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                carry = false;
            }
        }
    }
    let incremented: String = chars.into_iter().collect();
    if carry {
        format!("1{}", incremented)
    } else {
        incremented
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Monetary amount with exactly two decimals.
pub fn format_money(value: f64) -> String {
    format_decimal(value, 2, 2, DEFAULT_FALLBACK)
}

/// Amount with the currency symbol and a detached minus sign, e.g. `- $1,250.00`.
pub fn format_signed_money(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{}{}", symbol, DEFAULT_FALLBACK);
    }
    let amount = format_money(value.abs());
    if value < 0.0 && amount != format_money(0.0) {
        format!("- {}{}", symbol, amount)
    } else {
        format!("{}{}", symbol, amount)
    }
}

/// Count of things: whole numbers print without decimals, anything else
/// with up to `max_fraction` decimals.
pub fn format_count(value: f64, max_fraction: usize) -> String {
    let min_fraction = if value.fract() == 0.0 && value != 0.0 {
        0
    } else {
        2
    };
    format_decimal(value, min_fraction, max_fraction, "0")
}

/// Percentage of a fraction (`0.25` is `25%`), without decimals.
pub fn format_percent(fraction: f64, fallback: &str) -> String {
    if !fraction.is_finite() {
        return fallback.to_string();
    }
    format!("{}%", format_decimal(fraction * 100.0, 0, 0, fallback))
}

pub fn format_roi(roi: Roi) -> String {
    match roi {
        Roi::Percent(value) => format_percent(value / 100.0, NOT_AVAILABLE),
        Roi::Unbounded => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_money(1_234_567.891), "1,234,567.89");
        assert_eq!(format_money(999.0), "999.00");
        assert_eq!(format_money(1000.0), "1,000.00");
        assert_eq!(format_money(0.0), "0.00");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(format_money(0.125), "0.13");
        assert_eq!(format_money(0.625), "0.63");
        assert_eq!(format_money(-0.125), "-0.13");
        assert_eq!(format_money(9_999.875), "9,999.88");
        assert_eq!(format_decimal(2.5, 0, 0, "0"), "3");
        assert_eq!(format_decimal(99.5, 0, 0, "0"), "100");
        assert_eq!(format_count(0.25, 1), "0.3");
        assert_eq!(format_percent(0.125, NOT_AVAILABLE), "13%");
        // 1.005 is stored just below the tie
        assert_eq!(format_money(1.005), "1.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_money(-2500.5), "-2,500.50");
        assert_eq!(format_money(-0.001), "0.00");
        assert_eq!(format_signed_money(-2500.5, "$"), "- $2,500.50");
        assert_eq!(format_signed_money(2500.5, "$"), "$2,500.50");
        assert_eq!(format_signed_money(-0.001, "$"), "$0.00");
    }

    #[test]
    fn test_non_finite_uses_fallback() {
        assert_eq!(format_money(f64::NAN), DEFAULT_FALLBACK);
        assert_eq!(format_money(f64::INFINITY), DEFAULT_FALLBACK);
        assert_eq!(format_percent(f64::INFINITY, NOT_AVAILABLE), NOT_AVAILABLE);
        assert_eq!(format_signed_money(f64::NEG_INFINITY, "$"), "$0.00");
    }

    #[test]
    fn test_count_drops_decimals_for_whole_numbers() {
        assert_eq!(format_count(1114.0, 0), "1,114");
        assert_eq!(format_count(1593.02, 0), "1,593");
        assert_eq!(format_count(95.37, 1), "95.4");
        assert_eq!(format_count(381.0, 1), "381");
        assert_eq!(format_count(0.0, 1), "0.0");
    }

    #[test]
    fn test_percent_and_roi() {
        assert_eq!(format_percent(0.7, NOT_AVAILABLE), "70%");
        assert_eq!(format_roi(Roi::Percent(213.6)), "214%");
        assert_eq!(format_roi(Roi::Percent(-50.0)), "-50%");
        assert_eq!(format_roi(Roi::Unbounded), "N/A");
    }
}
