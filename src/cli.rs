use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::DaysOpen;
use crate::formatting::Language;
use crate::validation::Field;

#[derive(Parser, Debug)]
#[command(name = "chatroi")]
#[command(about = "Return-on-investment estimator for chat automation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    ///
    /// Ignored when RUST_LOG is set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate monthly and yearly returns for an industry and plan
    Estimate {
        /// Industry profile key (see `chatroi industries`)
        #[arg(short, long)]
        industry: Option<String>,

        /// Pricing tier key (see `chatroi tiers`)
        #[arg(short, long)]
        tier: Option<String>,

        /// Operating schedule
        #[arg(long = "days-open", value_enum)]
        days_open: Option<DaysOpenArg>,

        /// Override an input, e.g. `--set avg_lead_value=1500`
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_field_override)]
        overrides: Vec<FieldOverride>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips discovery)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Report language
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,

        /// Plain output: no colors, no emoji
        #[arg(long)]
        plain: bool,

        /// Exit with an error when any input is invalid
        #[arg(long)]
        strict: bool,
    },

    /// List industry profiles and their benchmark defaults
    Industries {
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ListFormat,
    },

    /// List pricing tiers
    Tiers {
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ListFormat,
    },

    /// Format a payback period given in months
    Payback {
        /// Months, e.g. 13.5
        #[arg(allow_negative_numbers = true)]
        months: f64,

        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
    },

    /// Write a default .chatroi.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Json,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DaysOpenArg {
    /// Monday to Friday (22 days a month)
    Weekdays,
    /// Monday to Saturday (26 days a month)
    Sixdays,
    /// Every day (30 days a month)
    Alldays,
}

impl From<DaysOpenArg> for DaysOpen {
    fn from(arg: DaysOpenArg) -> Self {
        match arg {
            DaysOpenArg::Weekdays => DaysOpen::Weekdays,
            DaysOpenArg::Sixdays => DaysOpen::SixDays,
            DaysOpenArg::Alldays => DaysOpen::AllDays,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    En,
    Es,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::En,
            LanguageArg::Es => Language::Es,
        }
    }
}

/// One `--set field=value` pair. The value stays raw text so it goes
/// through the same parsing as an interactive edit.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldOverride {
    pub field: Field,
    pub raw: String,
}

fn parse_field_override(s: &str) -> Result<FieldOverride, String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let field = key.parse::<Field>()?;
    Ok(FieldOverride {
        field,
        raw: raw.to_string(),
    })
}
