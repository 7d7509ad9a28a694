use anyhow::Result;
use std::io::Write;

use crate::formatting::{format_payback_months, Language};

/// Print the payback label for `months`.
///
/// Negative or non-finite input prints the "never" label, like an
/// unrecoverable estimate.
pub fn write_payback<W: Write>(writer: &mut W, months: f64, language: Language) -> Result<()> {
    writeln!(writer, "{}", format_payback_months(months, language))?;
    Ok(())
}
