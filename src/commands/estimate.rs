use anyhow::Result;
use std::path::PathBuf;

use crate::cli::FieldOverride;
use crate::config::{self, ChatroiConfig};
use crate::core::DaysOpen;
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig, Language};
use crate::io::{self, create_writer, OutputFormat, Report};
use crate::session::Session;

pub struct EstimateConfig {
    pub industry: Option<String>,
    pub tier: Option<String>,
    pub days_open: Option<DaysOpen>,
    pub overrides: Vec<FieldOverride>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub language: Option<Language>,
    pub plain: bool,
    pub strict: bool,
}

pub fn handle_estimate(config: EstimateConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    let session = build_session(&file_config, &config);
    let format = resolve_format(&file_config, config.format);
    let formatting = resolve_formatting(&file_config, &config);
    let report = Report::from_session(&session);

    match &config.output {
        Some(path) => {
            let mut buffer = Vec::new();
            {
                let mut writer = create_writer(format, formatting, Box::new(&mut buffer));
                writer.write_report(&report)?;
            }
            io::write_file(path, &String::from_utf8_lossy(&buffer))?;
            log::info!("Wrote report to {}", path.display());
        }
        None => {
            let mut writer = create_writer(format, formatting, Box::new(std::io::stdout().lock()));
            writer.write_report(&report)?;
        }
    }

    if config.strict && session.has_errors() {
        let fields: Vec<&str> = io::output::blocking_fields(session.errors())
            .into_iter()
            .map(|field| field.key())
            .collect();
        anyhow::bail!("Invalid inputs: {}", fields.join(", "));
    }

    Ok(())
}

/// Session from configured defaults, then CLI selections, then field overrides.
///
/// Industry and tier are selected before overrides so a selection does not
/// wipe the overridden values or their errors.
pub fn build_session(file_config: &ChatroiConfig, config: &EstimateConfig) -> Session {
    let mut session = Session::from_config(file_config);

    if let Some(industry) = &config.industry {
        session.select_industry(industry);
    }
    if let Some(tier) = &config.tier {
        session.select_tier(tier);
    }
    if let Some(days_open) = config.days_open {
        session.set_days_open(days_open);
    }
    for FieldOverride { field, raw } in &config.overrides {
        if let Err(error) = session.edit_field(*field, raw) {
            log::warn!("{} ({}): {}", field.label(), field.key(), error);
        }
    }

    session
}

fn resolve_format(file_config: &ChatroiConfig, requested: Option<OutputFormat>) -> OutputFormat {
    requested
        .or_else(|| file_config.default_format().and_then(OutputFormat::parse))
        .unwrap_or_default()
}

fn resolve_formatting(file_config: &ChatroiConfig, config: &EstimateConfig) -> FormattingConfig {
    let base = if config.plain || config.output.is_some() {
        FormattingConfig::plain()
    } else {
        let mut env_config = FormattingConfig::from_env();
        match file_config.use_color() {
            Some(false) => {
                env_config.color = ColorMode::Never;
                env_config.emoji = EmojiMode::Never;
            }
            Some(true) if env_config.color == ColorMode::Auto => {
                env_config.color = ColorMode::Always;
            }
            _ => {}
        }
        env_config
    };

    base.with_language(config.language.unwrap_or_else(|| file_config.language()))
        .with_currency_symbol(file_config.currency_symbol())
}
