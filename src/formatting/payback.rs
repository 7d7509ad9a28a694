use super::Language;
use crate::core::{PaybackPeriod, MAX_PAYBACK_MONTHS};

pub fn format_payback(period: PaybackPeriod, language: Language) -> String {
    match period {
        PaybackPeriod::Months(months) => format_payback_months(months, language),
        PaybackPeriod::Never => language.duration_labels().never.to_string(),
    }
}

/// Human-readable duration for a month count.
///
/// Whole years are split off first; the remaining months are rounded, not
/// truncated. Components that come out as zero are omitted. Periods of
/// [`MAX_PAYBACK_MONTHS`] or more read as never.
pub fn format_payback_months(months: f64, language: Language) -> String {
    let labels = language.duration_labels();

    if !months.is_finite() || months < 0.0 || months >= MAX_PAYBACK_MONTHS {
        return labels.never.to_string();
    }
    if months == 0.0 {
        return labels.immediate.to_string();
    }

    let years = (months / 12.0).floor() as u64;
    let remaining = (months % 12.0).round() as u64;

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        let unit = if years > 1 { labels.years } else { labels.year };
        parts.push(format!("{} {}", years, unit));
    }
    if remaining > 0 {
        let unit = if remaining > 1 {
            labels.months
        } else {
            labels.month
        };
        parts.push(format!("{} {}", remaining, unit));
    }

    if parts.is_empty() {
        labels.under_one_month.to_string()
    } else {
        parts.join(" ")
    }
}
