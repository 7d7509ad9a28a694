//! Per-field parsing and validation of raw input text.
//!
//! Validation is advisory. A field in error is recorded in [`FieldErrors`]
//! but still yields a number for the estimator:
//!
//! - empty text is a valid 0
//! - text that does not parse to a finite number computes as 0
//! - a number outside the field's range is used as typed
//!
//! The only consumer of the aggregate state is the call-to-action gate
//! ([`FieldErrors::has_errors`]); recomputation is never blocked.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::core::EstimateInputs;

/// Editable numeric input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BusinessHourMessages,
    AfterHourMessages,
    MissedMessageRate,
    AutomationPercentage,
    SalesMessagePercentage,
    AvgLeadValue,
    ConversionRate,
    HumanHourlyWage,
    HumanHoursPerWeek,
    HumanOverheadPercentage,
}

/// Largest count or amount accepted for the open-ended fields.
pub const MAX_QUANTITY: f64 = 1e9;

/// Inclusive range accepted for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    const NON_NEGATIVE: Bounds = Bounds {
        min: 0.0,
        max: MAX_QUANTITY,
    };
    const PERCENT: Bounds = Bounds {
        min: 0.0,
        max: 100.0,
    };
    /// Overhead can exceed the wage itself; capped at double.
    const OVERHEAD: Bounds = Bounds {
        min: 0.0,
        max: 200.0,
    };

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::BusinessHourMessages,
        Field::AfterHourMessages,
        Field::MissedMessageRate,
        Field::AutomationPercentage,
        Field::SalesMessagePercentage,
        Field::AvgLeadValue,
        Field::ConversionRate,
        Field::HumanHourlyWage,
        Field::HumanHoursPerWeek,
        Field::HumanOverheadPercentage,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::BusinessHourMessages => "business_hour_messages",
            Field::AfterHourMessages => "after_hour_messages",
            Field::MissedMessageRate => "missed_message_rate",
            Field::AutomationPercentage => "automation_percentage",
            Field::SalesMessagePercentage => "sales_message_percentage",
            Field::AvgLeadValue => "avg_lead_value",
            Field::ConversionRate => "conversion_rate",
            Field::HumanHourlyWage => "human_hourly_wage",
            Field::HumanHoursPerWeek => "human_hours_per_week",
            Field::HumanOverheadPercentage => "human_overhead_percentage",
        }
    }

    /// Accepts snake_case, kebab-case and camelCase keys.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Field::ALL.iter().copied().find(|field| {
            field.key().replace('_', "") == normalized
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::BusinessHourMessages => "Daily messages (business hours)",
            Field::AfterHourMessages => "Daily messages (after hours)",
            Field::MissedMessageRate => "Missed message rate (%)",
            Field::AutomationPercentage => "Automation coverage (%)",
            Field::SalesMessagePercentage => "Sales-opportunity messages (%)",
            Field::AvgLeadValue => "Value per converted chat",
            Field::ConversionRate => "Conversion rate (%)",
            Field::HumanHourlyWage => "Staff hourly wage",
            Field::HumanHoursPerWeek => "Staffed hours per week",
            Field::HumanOverheadPercentage => "Staff overhead (%)",
        }
    }

    pub fn bounds(self) -> Bounds {
        match self {
            Field::MissedMessageRate
            | Field::AutomationPercentage
            | Field::SalesMessagePercentage
            | Field::ConversionRate => Bounds::PERCENT,
            Field::HumanOverheadPercentage => Bounds::OVERHEAD,
            Field::BusinessHourMessages
            | Field::AfterHourMessages
            | Field::AvgLeadValue
            | Field::HumanHourlyWage
            | Field::HumanHoursPerWeek => Bounds::NON_NEGATIVE,
        }
    }

    /// Whether an error on this field blocks the call to action.
    ///
    /// Automation coverage is a slider-style estimate and never gates.
    pub fn gates_submission(self) -> bool {
        !matches!(self, Field::AutomationPercentage)
    }

    pub fn get(self, inputs: &EstimateInputs) -> f64 {
        match self {
            Field::BusinessHourMessages => inputs.business_hour_messages,
            Field::AfterHourMessages => inputs.after_hour_messages,
            Field::MissedMessageRate => inputs.missed_message_rate,
            Field::AutomationPercentage => inputs.automation_percentage,
            Field::SalesMessagePercentage => inputs.sales_message_percentage,
            Field::AvgLeadValue => inputs.avg_lead_value,
            Field::ConversionRate => inputs.conversion_rate,
            Field::HumanHourlyWage => inputs.human_hourly_wage,
            Field::HumanHoursPerWeek => inputs.human_hours_per_week,
            Field::HumanOverheadPercentage => inputs.human_overhead_percentage,
        }
    }

    pub fn set(self, inputs: &mut EstimateInputs, value: f64) {
        let slot = match self {
            Field::BusinessHourMessages => &mut inputs.business_hour_messages,
            Field::AfterHourMessages => &mut inputs.after_hour_messages,
            Field::MissedMessageRate => &mut inputs.missed_message_rate,
            Field::AutomationPercentage => &mut inputs.automation_percentage,
            Field::SalesMessagePercentage => &mut inputs.sales_message_percentage,
            Field::AvgLeadValue => &mut inputs.avg_lead_value,
            Field::ConversionRate => &mut inputs.conversion_rate,
            Field::HumanHourlyWage => &mut inputs.human_hourly_wage,
            Field::HumanHoursPerWeek => &mut inputs.human_hours_per_week,
            Field::HumanOverheadPercentage => &mut inputs.human_overhead_percentage,
        };
        *slot = value;
    }

    /// Hint shown next to a field in error.
    pub fn hint(self) -> String {
        let bounds = self.bounds();
        if bounds == Bounds::NON_NEGATIVE {
            "Enter a positive number up to 1,000,000,000.".to_string()
        } else {
            format!(
                "Enter a value between {} and {}.",
                bounds.min, bounds.max
            )
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s).ok_or_else(|| {
            let keys: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
            format!("Unknown field: '{}'. Valid fields: {}", s, keys.join(", "))
        })
    }
}

/// Why a field's text was rejected.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{value} is outside the range {min} to {max}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("'{raw}' is not a number")]
    NotNumeric { raw: String },
}

/// Outcome of parsing one field's text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Cleared by the user; computes as 0 and is not an error
    Empty,
    Valid(f64),
    Invalid { coerced: f64, error: FieldError },
}

impl FieldValue {
    /// Number the estimator uses for this field.
    pub fn value(&self) -> f64 {
        match self {
            FieldValue::Empty => 0.0,
            FieldValue::Valid(value) => *value,
            FieldValue::Invalid { coerced, .. } => *coerced,
        }
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            FieldValue::Invalid { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<f64, FieldError> {
        match self {
            FieldValue::Empty => Ok(0.0),
            FieldValue::Valid(value) => Ok(value),
            FieldValue::Invalid { error, .. } => Err(error),
        }
    }
}

/// Parse a number, accepting a decimal comma in place of the point.
pub fn parse_number(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn parse_field(field: Field, raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FieldValue::Empty;
    }

    let Some(value) = parse_number(trimmed) else {
        return FieldValue::Invalid {
            coerced: 0.0,
            error: FieldError::NotNumeric {
                raw: trimmed.to_string(),
            },
        };
    };

    check_value(field, value)
}

/// Range-check a number that is already parsed. Non-finite values are
/// rejected as not numeric.
pub fn check_value(field: Field, value: f64) -> FieldValue {
    if !value.is_finite() {
        return FieldValue::Invalid {
            coerced: 0.0,
            error: FieldError::NotNumeric {
                raw: value.to_string(),
            },
        };
    }

    let bounds = field.bounds();
    if bounds.contains(value) {
        FieldValue::Valid(value)
    } else {
        FieldValue::Invalid {
            coerced: value,
            error: FieldError::OutOfRange {
                value,
                min: bounds.min,
                max: bounds.max,
            },
        }
    }
}

/// Current advisory error per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of an edit, clearing any previous error.
    pub fn record(&mut self, field: Field, value: &FieldValue) {
        match value.error() {
            Some(error) => {
                self.errors.insert(field, error.clone());
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Gate for the call to action. Ignores fields that never gate.
    pub fn has_errors(&self) -> bool {
        self.errors.keys().any(|field| field.gates_submission())
    }
}
