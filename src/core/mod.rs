//! Data model shared by the catalog, the estimator and the report writers.
//!
//! Every monetary amount is a plain `f64` in the catalog's currency (MXN for
//! the shipped tables). Percentages are stored on a 0-100 scale and divided
//! by 100 at the point of use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating schedule of the business.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaysOpen {
    /// Monday to Friday
    Weekdays,
    /// Monday to Saturday
    #[default]
    SixDays,
    /// Every day of the week
    AllDays,
}

impl DaysOpen {
    pub const ALL: [DaysOpen; 3] = [DaysOpen::Weekdays, DaysOpen::SixDays, DaysOpen::AllDays];

    /// Business days counted per month for this schedule.
    pub fn days_per_month(self) -> f64 {
        match self {
            DaysOpen::Weekdays => 22.0,
            DaysOpen::SixDays => 26.0,
            DaysOpen::AllDays => 30.0,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekdays" | "5" => Some(DaysOpen::Weekdays),
            "sixdays" | "6" => Some(DaysOpen::SixDays),
            "alldays" | "7" => Some(DaysOpen::AllDays),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DaysOpen::Weekdays => "weekdays",
            DaysOpen::SixDays => "sixdays",
            DaysOpen::AllDays => "alldays",
        }
    }
}

impl fmt::Display for DaysOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DaysOpen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DaysOpen::parse(s).ok_or_else(|| {
            format!(
                "Invalid schedule: '{}'. Valid options: weekdays, sixdays, alldays",
                s
            )
        })
    }
}

/// The numeric inputs of one estimate.
///
/// All values are already coerced to numbers; text handling lives in
/// [`crate::validation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateInputs {
    /// Average daily messages during business hours
    pub business_hour_messages: f64,
    /// Average daily messages outside business hours
    pub after_hour_messages: f64,
    /// Percent of business-hour messages not answered in time
    pub missed_message_rate: f64,
    /// Percent of volume handled without a human
    pub automation_percentage: f64,
    /// Percent of messages that are a sales opportunity
    pub sales_message_percentage: f64,
    pub days_open: DaysOpen,
    /// Value of one converted conversation
    pub avg_lead_value: f64,
    /// Percent of sales-opportunity messages that convert
    pub conversion_rate: f64,
    pub human_hourly_wage: f64,
    pub human_hours_per_week: f64,
    /// Extra cost loaded on wages (benefits, taxes)
    pub human_overhead_percentage: f64,
}

impl Default for EstimateInputs {
    fn default() -> Self {
        Self {
            business_hour_messages: 0.0,
            after_hour_messages: 0.0,
            missed_message_rate: 0.0,
            automation_percentage: 0.0,
            sales_message_percentage: 0.0,
            days_open: DaysOpen::default(),
            avg_lead_value: 0.0,
            conversion_rate: 0.0,
            human_hourly_wage: 0.0,
            human_hours_per_week: DEFAULT_HOURS_PER_WEEK,
            human_overhead_percentage: 0.0,
        }
    }
}

/// Staffed hours per week when nothing else says otherwise.
pub const DEFAULT_HOURS_PER_WEEK: f64 = 40.0;

/// Active platform fee pair. Overwritten whenever a tier is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TierFees {
    /// One-time setup fee
    pub setup_fee: f64,
    /// Recurring monthly fee
    pub monthly_fee: f64,
}

impl TierFees {
    pub fn new(setup_fee: f64, monthly_fee: f64) -> Self {
        Self {
            setup_fee,
            monthly_fee,
        }
    }
}

/// Monthly return on investment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Roi {
    /// ROI as a percentage (100.0 means the benefit equals the cost)
    Percent(f64),
    /// The platform costs nothing and the benefit is positive
    Unbounded,
}

impl Roi {
    pub fn percent(self) -> Option<f64> {
        match self {
            Roi::Percent(value) => Some(value),
            Roi::Unbounded => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Roi::Unbounded)
    }
}

/// Months needed for the net benefit to cover the setup fee.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PaybackPeriod {
    Months(f64),
    /// The monthly net benefit is not positive
    Never,
}

/// Payback periods of a thousand years or more are reported as never.
pub const MAX_PAYBACK_MONTHS: f64 = 12_000.0;

impl PaybackPeriod {
    pub fn months(self) -> Option<f64> {
        match self {
            PaybackPeriod::Months(value) => Some(value),
            PaybackPeriod::Never => None,
        }
    }

    /// True for a strictly positive period below [`MAX_PAYBACK_MONTHS`].
    pub fn is_recoverable(self) -> bool {
        matches!(self, PaybackPeriod::Months(m) if m > 0.0 && m < MAX_PAYBACK_MONTHS)
    }
}

/// Snapshot of every derived value for one set of inputs.
///
/// Produced only by [`crate::estimator::compute`] and replaced as a whole on
/// every recompute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    // Staffing baseline
    pub weekly_cost: f64,
    pub yearly_cost: f64,
    pub monthly_wage_cost: f64,
    pub human_monthly_cost: f64,

    // Monthly message volume
    pub days_per_month: f64,
    pub monthly_business_messages: f64,
    pub monthly_after_hour_messages: f64,
    pub total_received: f64,
    pub missed_component: f64,
    pub total_messages_handled: f64,

    // Missed opportunities
    pub missed_business_hour_messages: f64,
    pub total_missed_messages: f64,
    pub sales_missed_messages: f64,
    pub potential_revenue: f64,
    pub converted_patients_lost: f64,

    // Platform cost
    pub ai_setup_fee: f64,
    pub ai_total_monthly_cost: f64,
    pub ai_setup_fee_monthly: f64,
    pub ai_total_cost_with_setup: f64,

    // Monthly comparison
    pub cost_savings: f64,
    pub net_benefit: f64,
    pub roi: Roi,
    pub payback: PaybackPeriod,

    // Annual projections
    pub yearly_cost_savings: f64,
    pub yearly_potential_revenue: f64,
    pub yearly_net_benefit: f64,
    pub first_year_net_return: f64,
    pub first_year_revenue_vs_ai_cost: f64,

    /// Passed through from the inputs for display
    pub automation_percentage: f64,
}
