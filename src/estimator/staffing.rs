use crate::core::EstimateInputs;

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Cost of the current human-operated baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaffingCost {
    pub weekly_cost: f64,
    pub yearly_cost: f64,
    pub monthly_wage_cost: f64,
    /// Monthly wage cost with overhead loaded on top
    pub human_monthly_cost: f64,
}

pub fn staffing_cost(inputs: &EstimateInputs) -> StaffingCost {
    let weekly_cost = inputs.human_hourly_wage * inputs.human_hours_per_week;
    let yearly_cost = weekly_cost * WEEKS_PER_YEAR;
    let monthly_wage_cost = yearly_cost / MONTHS_PER_YEAR;
    let human_monthly_cost = monthly_wage_cost * (1.0 + inputs.human_overhead_percentage / 100.0);

    StaffingCost {
        weekly_cost,
        yearly_cost,
        monthly_wage_cost,
        human_monthly_cost,
    }
}
