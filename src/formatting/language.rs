use serde::{Deserialize, Serialize};

/// Language of user-facing report text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "english")]
    En,
    #[serde(alias = "spanish", alias = "español")]
    Es,
}

/// Duration vocabulary for the payback formatter.
pub(crate) struct DurationLabels {
    pub never: &'static str,
    pub immediate: &'static str,
    pub year: &'static str,
    pub years: &'static str,
    pub month: &'static str,
    pub months: &'static str,
    pub under_one_month: &'static str,
}

const ENGLISH: DurationLabels = DurationLabels {
    never: "Never",
    immediate: "Immediate",
    year: "year",
    years: "years",
    month: "month",
    months: "months",
    under_one_month: "Less than 1 month",
};

const SPANISH: DurationLabels = DurationLabels {
    never: "Nunca",
    immediate: "Inmediato",
    year: "año",
    years: "años",
    month: "mes",
    months: "meses",
    under_one_month: "Menos de 1 mes",
};

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "es" | "spanish" | "español" => Some(Language::Es),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub(crate) fn duration_labels(self) -> &'static DurationLabels {
        match self {
            Language::En => &ENGLISH,
            Language::Es => &SPANISH,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
            .ok_or_else(|| format!("Invalid language: '{}'. Valid options: en, es", s))
    }
}
