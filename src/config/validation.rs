//! Validation with error accumulation for configuration.
//!
//! Every problem in a config file is collected with stillwater's
//! `Validation` so a user sees all of them in one run. Invalid values are
//! then dropped by [`sanitize_config`] and the built-in defaults apply.

use std::fmt;

use stillwater::{NonEmptyVec, Validation};

use super::core::{ChatroiConfig, DefaultsConfig, DisplayConfig, OutputConfig};
use crate::catalog::{Industry, Tier};
use crate::core::DaysOpen;
use crate::formatting::Language;

/// One rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path, e.g. `defaults.tier`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub type ConfigValidation<T> = Validation<T, NonEmptyVec<ConfigIssue>>;

const OUTPUT_FORMATS: [&str; 3] = ["terminal", "markdown", "json"];

/// Validate entire config, accumulating ALL issues.
pub fn validate_config(config: &ChatroiConfig) -> ConfigValidation<()> {
    let mut issues = Vec::new();
    if let Some(defaults) = &config.defaults {
        issues.extend(defaults_issues(defaults));
    }
    if let Some(output) = &config.output {
        issues.extend(output_issues(output));
    }
    if let Some(display) = &config.display {
        issues.extend(display_issues(display));
    }

    match NonEmptyVec::from_vec(issues) {
        Some(issues) => Validation::Failure(issues),
        None => Validation::Success(()),
    }
}

/// Validate config with a fail-fast `Result` API.
pub fn validate_config_result(config: &ChatroiConfig) -> crate::errors::Result<()> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(issues) => {
            let messages: Vec<String> = issues.into_vec().iter().map(|i| i.to_string()).collect();
            Err(crate::errors::Error::Validation(messages.join("; ")))
        }
    }
}

fn defaults_issues(defaults: &DefaultsConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if let Some(industry) = &defaults.industry {
        if Industry::parse(industry).is_none() {
            issues.push(ConfigIssue::new(
                "defaults.industry",
                format!("unknown industry '{}'", industry),
            ));
        }
    }
    if let Some(tier) = &defaults.tier {
        if Tier::parse(tier).is_none() {
            issues.push(ConfigIssue::new(
                "defaults.tier",
                format!(
                    "unknown tier '{}' (expected basic, professional or enterprise)",
                    tier
                ),
            ));
        }
    }
    if let Some(days_open) = &defaults.days_open {
        if DaysOpen::parse(days_open).is_none() {
            issues.push(ConfigIssue::new(
                "defaults.days_open",
                format!(
                    "unknown schedule '{}' (expected weekdays, sixdays or alldays)",
                    days_open
                ),
            ));
        }
    }
    if let Some(hours) = defaults.human_hours_per_week {
        if !hours.is_finite() || hours < 0.0 {
            issues.push(ConfigIssue::new(
                "defaults.human_hours_per_week",
                format!("must be a non-negative number, got {}", hours),
            ));
        }
    }

    issues
}

fn output_issues(output: &OutputConfig) -> Vec<ConfigIssue> {
    match &output.default_format {
        Some(format) if !OUTPUT_FORMATS.contains(&format.to_lowercase().as_str()) => {
            vec![ConfigIssue::new(
                "output.default_format",
                format!(
                    "unknown format '{}' (expected {})",
                    format,
                    OUTPUT_FORMATS.join(", ")
                ),
            )]
        }
        _ => Vec::new(),
    }
}

fn display_issues(display: &DisplayConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if let Some(language) = &display.language {
        if Language::parse(language).is_none() {
            issues.push(ConfigIssue::new(
                "display.language",
                format!("unknown language '{}' (expected en or es)", language),
            ));
        }
    }
    if let Some(symbol) = &display.currency_symbol {
        if symbol.trim().is_empty() {
            issues.push(ConfigIssue::new(
                "display.currency_symbol",
                "must not be empty",
            ));
        }
    }

    issues
}

/// Drop every value that [`validate_config`] would reject.
pub fn sanitize_config(mut config: ChatroiConfig) -> ChatroiConfig {
    if let Some(defaults) = config.defaults.as_mut() {
        for issue in defaults_issues(defaults) {
            match issue.field.as_str() {
                "defaults.industry" => defaults.industry = None,
                "defaults.tier" => defaults.tier = None,
                "defaults.days_open" => defaults.days_open = None,
                "defaults.human_hours_per_week" => defaults.human_hours_per_week = None,
                _ => {}
            }
        }
    }
    if let Some(output) = config.output.as_mut() {
        if !output_issues(output).is_empty() {
            output.default_format = None;
        }
    }
    if let Some(display) = config.display.as_mut() {
        for issue in display_issues(display) {
            match issue.field.as_str() {
                "display.language" => display.language = None,
                "display.currency_symbol" => display.currency_symbol = None,
                _ => {}
            }
        }
    }
    config
}
