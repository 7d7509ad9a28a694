use serde::{Deserialize, Serialize};

use crate::catalog::{Industry, Tier};
use crate::core::DaysOpen;
use crate::formatting::Language;

/// Root configuration structure, read from `.chatroi.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChatroiConfig {
    /// Starting industry, tier and schedule
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Report language and currency
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DefaultsConfig {
    /// Industry key, e.g. "clinica_dental"
    pub industry: Option<String>,
    /// Tier key: basic, professional or enterprise
    pub tier: Option<String>,
    /// weekdays, sixdays or alldays
    pub days_open: Option<String>,
    pub human_hours_per_week: Option<f64>,
}

impl DefaultsConfig {
    pub fn industry(&self) -> Option<Industry> {
        self.industry.as_deref().and_then(Industry::parse)
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier.as_deref().and_then(Tier::parse)
    }

    pub fn days_open(&self) -> Option<DaysOpen> {
        self.days_open.as_deref().and_then(DaysOpen::parse)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// terminal, markdown or json
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// en or es
    pub language: Option<String>,
    pub currency_symbol: Option<String>,
}

impl DisplayConfig {
    pub fn language(&self) -> Option<Language> {
        self.language.as_deref().and_then(Language::parse)
    }
}

impl ChatroiConfig {
    pub fn defaults(&self) -> DefaultsConfig {
        self.defaults.clone().unwrap_or_default()
    }

    pub fn language(&self) -> Language {
        self.display
            .as_ref()
            .and_then(DisplayConfig::language)
            .unwrap_or_default()
    }

    pub fn currency_symbol(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.currency_symbol.as_deref())
            .unwrap_or("$")
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.default_format.as_deref())
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}
