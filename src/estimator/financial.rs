use crate::core::{PaybackPeriod, Roi, TierFees};

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformCost {
    pub ai_total_monthly_cost: f64,
    /// Setup fee spread over the first year
    pub ai_setup_fee_monthly: f64,
    pub ai_total_cost_with_setup: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyComparison {
    pub cost_savings: f64,
    pub net_benefit: f64,
    pub roi: Roi,
    pub payback: PaybackPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualProjection {
    pub yearly_cost_savings: f64,
    pub yearly_potential_revenue: f64,
    pub yearly_net_benefit: f64,
    pub first_year_net_return: f64,
    pub first_year_revenue_vs_ai_cost: f64,
}

pub fn platform_cost(fees: &TierFees) -> PlatformCost {
    let ai_total_monthly_cost = fees.monthly_fee;
    let ai_setup_fee_monthly = fees.setup_fee / MONTHS_PER_YEAR;

    PlatformCost {
        ai_total_monthly_cost,
        ai_setup_fee_monthly,
        ai_total_cost_with_setup: ai_total_monthly_cost + ai_setup_fee_monthly,
    }
}

/// ROI of a month, guarded against a zero-cost platform. A cost too small
/// for the ratio to fit in `f64` counts as zero.
pub fn roi(net_benefit: f64, cost: f64) -> Roi {
    let percent = net_benefit / cost * 100.0;
    if cost > 0.0 && percent.is_finite() {
        Roi::Percent(percent)
    } else if net_benefit > 0.0 {
        Roi::Unbounded
    } else {
        Roi::Percent(0.0)
    }
}

pub fn payback_period(setup_fee: f64, net_benefit: f64) -> PaybackPeriod {
    let months = setup_fee / net_benefit;
    if net_benefit > 0.0 && months.is_finite() {
        PaybackPeriod::Months(months)
    } else {
        PaybackPeriod::Never
    }
}

pub fn monthly_comparison(
    human_monthly_cost: f64,
    potential_revenue: f64,
    fees: &TierFees,
    platform: &PlatformCost,
) -> MonthlyComparison {
    let cost_savings = human_monthly_cost - platform.ai_total_cost_with_setup;
    let net_benefit = cost_savings + potential_revenue;

    MonthlyComparison {
        cost_savings,
        net_benefit,
        roi: roi(net_benefit, platform.ai_total_cost_with_setup),
        payback: payback_period(fees.setup_fee, net_benefit),
    }
}

/// Twelve-month view. Yearly savings use the recurring fee only; the setup
/// fee is charged once against the first year.
pub fn annual_projection(
    human_monthly_cost: f64,
    potential_revenue: f64,
    fees: &TierFees,
    platform: &PlatformCost,
) -> AnnualProjection {
    let yearly_cost_savings = (human_monthly_cost - platform.ai_total_monthly_cost) * MONTHS_PER_YEAR;
    let yearly_potential_revenue = potential_revenue * MONTHS_PER_YEAR;
    let yearly_net_benefit = yearly_cost_savings + yearly_potential_revenue;
    let first_year_net_return = yearly_net_benefit - fees.setup_fee;
    let first_year_platform_cost = platform.ai_total_monthly_cost * MONTHS_PER_YEAR + fees.setup_fee;

    AnnualProjection {
        yearly_cost_savings,
        yearly_potential_revenue,
        yearly_net_benefit,
        first_year_net_return,
        first_year_revenue_vs_ai_cost: yearly_potential_revenue - first_year_platform_cost,
    }
}
