//! `chatroi industries` and `chatroi tiers`.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::io::Write;

use crate::catalog::{industry_options, tier_options};
use crate::cli::ListFormat;
use crate::formatting::{format_count, FormattingConfig};

pub fn write_industries<W: Write>(
    writer: &mut W,
    format: ListFormat,
    formatting: &FormattingConfig,
) -> Result<()> {
    let options = industry_options();
    if format == ListFormat::Json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&options)?)?;
        return Ok(());
    }

    let mut table = new_table(formatting);
    table.set_header(header(
        formatting,
        &["KEY", "INDUSTRY", "MSGS/DAY", "AFTER HOURS", "MISSED %", "LEAD VALUE", "CONVERSION %"],
    ));
    for option in &options {
        let key = if option.is_default {
            format!("{} *", option.key)
        } else {
            option.key.to_string()
        };
        let preset = &option.preset;
        table.add_row(vec![
            Cell::new(key),
            Cell::new(option.name),
            number(format_count(preset.business_hour_messages, 0)),
            number(format_count(preset.after_hour_messages, 0)),
            number(format_count(preset.missed_message_rate, 1)),
            number(formatting.money(preset.avg_lead_value)),
            number(format_count(option.initial_conversion_rate, 0)),
        ]);
    }
    writeln!(writer, "{}", table)?;
    writeln!(writer, "* default")?;
    Ok(())
}

pub fn write_tiers<W: Write>(
    writer: &mut W,
    format: ListFormat,
    formatting: &FormattingConfig,
) -> Result<()> {
    let options = tier_options();
    if format == ListFormat::Json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&options)?)?;
        return Ok(());
    }

    let mut table = new_table(formatting);
    table.set_header(header(formatting, &["KEY", "PLAN", "SETUP FEE", "MONTHLY FEE", "DESCRIPTION"]));
    for option in &options {
        let key = if option.is_default {
            format!("{} *", option.pricing.key)
        } else {
            option.pricing.key.to_string()
        };
        table.add_row(vec![
            Cell::new(key),
            Cell::new(option.pricing.name),
            number(formatting.money(option.pricing.setup_fee)),
            number(formatting.money(option.pricing.monthly_fee)),
            Cell::new(option.pricing.description),
        ]);
    }
    writeln!(writer, "{}", table)?;
    writeln!(writer, "* default")?;
    Ok(())
}

fn new_table(formatting: &FormattingConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !formatting.color.should_use_color() {
        table.force_no_tty();
    }
    table
}

fn header(formatting: &FormattingConfig, titles: &[&str]) -> Vec<Cell> {
    let color = formatting.color.should_use_color();
    titles
        .iter()
        .map(|title| {
            let cell = Cell::new(title);
            if color {
                cell.fg(Color::Cyan)
            } else {
                cell
            }
        })
        .collect()
}

fn number(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}
