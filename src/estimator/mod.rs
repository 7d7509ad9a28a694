//! The estimation pipeline.
//!
//! [`compute`] maps one set of inputs and the active fee pair to a complete
//! [`Estimate`]. It is a pure function with no memory of previous calls:
//! callers re-invoke it after any change and replace their snapshot with the
//! result. Every step runs on every call, in this order:
//!
//! 1. staffing cost of the human baseline
//! 2. monthly message volume
//! 3. missed-opportunity estimate
//! 4. platform cost for the tier
//! 5. monthly comparison (savings, net benefit, ROI, payback)
//! 6. annual projections
//!
//! Division by zero never reaches the caller: ROI and payback resolve to the
//! [`Roi::Unbounded`](crate::core::Roi) and
//! [`PaybackPeriod::Never`](crate::core::PaybackPeriod) sentinels.
//! Inputs and fees are saturated at [`INPUT_CEILING`] first, so every
//! derived value is finite.

pub mod financial;
pub mod staffing;
pub mod volume;

pub use financial::{
    annual_projection, monthly_comparison, payback_period, platform_cost, roi, AnnualProjection,
    MonthlyComparison, PlatformCost,
};
pub use staffing::{staffing_cost, StaffingCost};
pub use volume::{
    message_volume, missed_opportunity, MessageVolume, MissedOpportunity,
    AFTER_HOURS_DAYS_PER_MONTH, CONVERSATION_OVERHEAD,
};

use crate::core::{Estimate, EstimateInputs, TierFees};

/// Magnitude cap on every input and fee. Products of values at this size
/// stay well inside `f64` range.
pub const INPUT_CEILING: f64 = 1e12;

fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-INPUT_CEILING, INPUT_CEILING)
    }
}

fn saturate_inputs(inputs: &EstimateInputs) -> EstimateInputs {
    EstimateInputs {
        business_hour_messages: saturate(inputs.business_hour_messages),
        after_hour_messages: saturate(inputs.after_hour_messages),
        missed_message_rate: saturate(inputs.missed_message_rate),
        automation_percentage: saturate(inputs.automation_percentage),
        sales_message_percentage: saturate(inputs.sales_message_percentage),
        days_open: inputs.days_open,
        avg_lead_value: saturate(inputs.avg_lead_value),
        conversion_rate: saturate(inputs.conversion_rate),
        human_hourly_wage: saturate(inputs.human_hourly_wage),
        human_hours_per_week: saturate(inputs.human_hours_per_week),
        human_overhead_percentage: saturate(inputs.human_overhead_percentage),
    }
}

pub fn compute(inputs: &EstimateInputs, fees: &TierFees) -> Estimate {
    let inputs = &saturate_inputs(inputs);
    let fees = &TierFees::new(saturate(fees.setup_fee), saturate(fees.monthly_fee));

    let staffing = staffing_cost(inputs);
    let volume = message_volume(inputs);
    let missed = missed_opportunity(inputs, &volume);
    let platform = platform_cost(fees);
    let monthly = monthly_comparison(
        staffing.human_monthly_cost,
        missed.potential_revenue,
        fees,
        &platform,
    );
    let yearly = annual_projection(
        staffing.human_monthly_cost,
        missed.potential_revenue,
        fees,
        &platform,
    );

    log::trace!(
        "estimate: net_benefit={:.2} roi={:?} payback={:?}",
        monthly.net_benefit,
        monthly.roi,
        monthly.payback
    );

    Estimate {
        weekly_cost: staffing.weekly_cost,
        yearly_cost: staffing.yearly_cost,
        monthly_wage_cost: staffing.monthly_wage_cost,
        human_monthly_cost: staffing.human_monthly_cost,

        days_per_month: volume.days_per_month,
        monthly_business_messages: volume.monthly_business_messages,
        monthly_after_hour_messages: volume.monthly_after_hour_messages,
        total_received: volume.total_received,
        missed_component: volume.missed_component,
        total_messages_handled: volume.total_messages_handled,

        missed_business_hour_messages: missed.missed_business_hour_messages,
        total_missed_messages: missed.total_missed_messages,
        sales_missed_messages: missed.sales_missed_messages,
        potential_revenue: missed.potential_revenue,
        converted_patients_lost: missed.converted_patients_lost,

        ai_setup_fee: fees.setup_fee,
        ai_total_monthly_cost: platform.ai_total_monthly_cost,
        ai_setup_fee_monthly: platform.ai_setup_fee_monthly,
        ai_total_cost_with_setup: platform.ai_total_cost_with_setup,

        cost_savings: monthly.cost_savings,
        net_benefit: monthly.net_benefit,
        roi: monthly.roi,
        payback: monthly.payback,

        yearly_cost_savings: yearly.yearly_cost_savings,
        yearly_potential_revenue: yearly.yearly_potential_revenue,
        yearly_net_benefit: yearly.yearly_net_benefit,
        first_year_net_return: yearly.first_year_net_return,
        first_year_revenue_vs_ai_cost: yearly.first_year_revenue_vs_ai_cost,

        automation_percentage: inputs.automation_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Industry, Tier};
    use crate::core::{DaysOpen, PaybackPeriod, Roi};

    #[test]
    fn test_family_medicine_professional() {
        let mut inputs = Industry::FamilyMedicine.preset().to_inputs();
        inputs.days_open = DaysOpen::Weekdays;
        let estimate = compute(&inputs, &Tier::Professional.fees());

        assert!((estimate.human_monthly_cost - 16_640.0).abs() < 1e-6);
        assert!((estimate.potential_revenue - 61_977.5).abs() < 1e-6);
        let expected_cost_savings = 16_640.0 - (21_500.0 + 42_500.0 / 12.0);
        assert!((estimate.cost_savings - expected_cost_savings).abs() < 1e-6);
        assert!((estimate.net_benefit - (expected_cost_savings + 61_977.5)).abs() < 1e-6);

        let Roi::Percent(roi) = estimate.roi else {
            panic!("expected finite ROI");
        };
        let expected_roi = estimate.net_benefit / estimate.ai_total_cost_with_setup * 100.0;
        assert!((roi - expected_roi).abs() < 1e-9);

        let months = estimate.payback.months().unwrap();
        assert!((months - 42_500.0 / estimate.net_benefit).abs() < 1e-12);
    }

    #[test]
    fn test_free_tier_with_benefit_is_unbounded() {
        let inputs = Industry::DentalClinic.preset().to_inputs();
        let estimate = compute(&inputs, &TierFees::new(0.0, 0.0));

        assert!(estimate.net_benefit > 0.0);
        assert_eq!(estimate.roi, Roi::Unbounded);
        assert_eq!(estimate.payback, PaybackPeriod::Months(0.0));
    }

    #[test]
    fn test_all_zero_inputs_never_pay_back() {
        let inputs = EstimateInputs {
            human_hours_per_week: 0.0,
            ..Default::default()
        };
        let estimate = compute(&inputs, &Tier::Basic.fees());

        assert_eq!(estimate.potential_revenue, 0.0);
        assert!(estimate.net_benefit < 0.0);
        assert_eq!(estimate.payback, PaybackPeriod::Never);
        assert!(matches!(estimate.roi, Roi::Percent(r) if r == -100.0));
    }

    fn assert_finite(estimate: &Estimate) {
        let value = serde_json::to_value(estimate).unwrap();
        let text = value.to_string();
        assert!(!text.contains("null"), "non-finite value in {text}");
    }

    #[test]
    fn test_overflowing_volume_with_zero_missed_rate_stays_finite() {
        let inputs = EstimateInputs {
            business_hour_messages: 1e308,
            after_hour_messages: 1e308,
            missed_message_rate: 0.0,
            sales_message_percentage: 100.0,
            avg_lead_value: f64::MAX,
            conversion_rate: 100.0,
            ..Default::default()
        };
        let estimate = compute(&inputs, &Tier::Professional.fees());

        assert_finite(&estimate);
        assert_eq!(estimate.missed_component, 0.0);
        assert!(estimate.net_benefit > 0.0);
        assert!(matches!(estimate.roi, Roi::Percent(r) if r.is_finite()));
        assert!(matches!(estimate.payback, PaybackPeriod::Months(m) if m.is_finite()));
    }

    #[test]
    fn test_extreme_fees_resolve_to_sentinels() {
        let inputs = Industry::DentalClinic.preset().to_inputs();
        let estimate = compute(&inputs, &TierFees::new(f64::INFINITY, f64::MIN_POSITIVE));

        assert_finite(&estimate);
        assert_eq!(estimate.ai_setup_fee, INPUT_CEILING);
        assert_eq!(estimate.payback, PaybackPeriod::Never);

        let tiny = compute(&inputs, &TierFees::new(0.0, f64::MIN_POSITIVE));
        assert_finite(&tiny);
        assert_eq!(tiny.roi, Roi::Unbounded);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let inputs = Industry::UrgentCare.preset().to_inputs();
        let fees = Tier::Enterprise.fees();
        assert_eq!(compute(&inputs, &fees), compute(&inputs, &fees));
    }
}
