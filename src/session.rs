//! In-memory estimator session.
//!
//! A [`Session`] holds the current inputs, the selected industry and tier,
//! the advisory field errors and the latest [`Estimate`]. Every mutation
//! finishes with a full recompute that replaces the estimate as a whole, so
//! a reader never sees a snapshot that mixes old and new inputs.

use crate::catalog::{Industry, Tier};
use crate::config::ChatroiConfig;
use crate::core::{DaysOpen, Estimate, EstimateInputs, TierFees};
use crate::estimator;
use crate::validation::{check_value, parse_field, Field, FieldError, FieldErrors, FieldValue};

#[derive(Debug, Clone)]
pub struct Session {
    industry: Industry,
    tier: Tier,
    fees: TierFees,
    inputs: EstimateInputs,
    errors: FieldErrors,
    estimate: Estimate,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Industry::DEFAULT, Tier::DEFAULT)
    }
}

impl Session {
    pub fn new(industry: Industry, tier: Tier) -> Self {
        let inputs = industry.preset().to_inputs();
        let fees = tier.fees();
        let estimate = estimator::compute(&inputs, &fees);
        Self {
            industry,
            tier,
            fees,
            inputs,
            errors: FieldErrors::new(),
            estimate,
        }
    }

    /// Session seeded from the `[defaults]` section of the configuration.
    /// Keys that do not resolve are left at the catalog defaults.
    pub fn from_config(config: &ChatroiConfig) -> Self {
        let defaults = config.defaults();
        let industry = defaults.industry().unwrap_or(Industry::DEFAULT);
        let tier = defaults.tier().unwrap_or(Tier::DEFAULT);

        let mut session = Self::new(industry, tier);
        if let Some(days_open) = defaults.days_open() {
            session.inputs.days_open = days_open;
        }
        if let Some(hours) = defaults.human_hours_per_week {
            session.inputs.human_hours_per_week = hours;
        }
        session.recompute();
        session
    }

    /// Switch industry profile. Unknown keys fall back to the default
    /// industry. Clears every field error.
    pub fn select_industry(&mut self, key: &str) -> Industry {
        let industry = Industry::lookup(key);
        log::debug!("Selecting industry {}", industry);
        self.industry = industry;
        industry.preset().apply_to(&mut self.inputs);
        self.errors.clear();
        self.recompute();
        industry
    }

    /// Switch pricing tier. Unknown keys fall back to the default tier.
    pub fn select_tier(&mut self, key: &str) -> Tier {
        let tier = Tier::lookup(key);
        log::debug!("Selecting tier {}", tier);
        self.tier = tier;
        self.fees = tier.fees();
        self.recompute();
        tier
    }

    pub fn set_days_open(&mut self, days_open: DaysOpen) {
        self.inputs.days_open = days_open;
        self.recompute();
    }

    /// Apply raw text typed into a field.
    ///
    /// The estimate is recomputed whatever the outcome; an `Err` only means
    /// the field is now flagged.
    pub fn edit_field(&mut self, field: Field, raw: &str) -> Result<f64, FieldError> {
        self.apply(field, parse_field(field, raw))
    }

    /// Set a field from a number that is already parsed. Range checks still
    /// apply.
    pub fn set_value(&mut self, field: Field, value: f64) -> Result<f64, FieldError> {
        self.apply(field, check_value(field, value))
    }

    fn apply(&mut self, field: Field, parsed: FieldValue) -> Result<f64, FieldError> {
        field.set(&mut self.inputs, parsed.value());
        self.errors.record(field, &parsed);
        if let Some(error) = parsed.error() {
            log::debug!("Field {} flagged: {}", field, error);
        }
        self.recompute();
        parsed.into_result()
    }

    fn recompute(&mut self) {
        self.estimate = estimator::compute(&self.inputs, &self.fees);
    }

    pub fn industry(&self) -> Industry {
        self.industry
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn fees(&self) -> TierFees {
        self.fees
    }

    pub fn inputs(&self) -> &EstimateInputs {
        &self.inputs
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the call to action should be disabled.
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultsConfig;
    use crate::core::PaybackPeriod;

    #[test]
    fn test_default_session_uses_default_catalog_entries() {
        let session = Session::default();
        assert_eq!(session.industry(), Industry::FamilyMedicine);
        assert_eq!(session.tier(), Tier::Professional);
        assert_eq!(session.inputs().days_open, DaysOpen::SixDays);
        assert_eq!(session.inputs().human_hours_per_week, 40.0);
        assert_eq!(session.inputs().conversion_rate, 98.0);
        assert_eq!(
            session.estimate(),
            &estimator::compute(session.inputs(), &Tier::Professional.fees())
        );
    }

    #[test]
    fn test_edit_recomputes() {
        let mut session = Session::default();
        let before = session.estimate().potential_revenue;

        assert_eq!(session.edit_field(Field::AvgLeadValue, "1300"), Ok(1300.0));
        let after = session.estimate().potential_revenue;
        assert!((after - before * 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_edit_still_recomputes_with_zero() {
        let mut session = Session::default();
        let result = session.edit_field(Field::AvgLeadValue, "mucho");

        assert!(result.is_err());
        assert!(session.has_errors());
        assert_eq!(session.inputs().avg_lead_value, 0.0);
        assert_eq!(session.estimate().potential_revenue, 0.0);
    }

    #[test]
    fn test_empty_edit_is_zero_without_error() {
        let mut session = Session::default();
        assert_eq!(session.edit_field(Field::HumanHourlyWage, ""), Ok(0.0));
        assert!(!session.has_errors());
        assert_eq!(session.estimate().human_monthly_cost, 0.0);
    }

    #[test]
    fn test_out_of_range_is_flagged_but_used() {
        let mut session = Session::default();
        assert!(session.edit_field(Field::SalesMessagePercentage, "150").is_err());
        assert_eq!(session.inputs().sales_message_percentage, 150.0);
        assert!(session.errors().is_invalid(Field::SalesMessagePercentage));
    }

    #[test]
    fn test_set_value_checks_range() {
        let mut session = Session::default();
        assert_eq!(session.set_value(Field::ConversionRate, 40.0), Ok(40.0));
        assert!(session.set_value(Field::ConversionRate, 140.0).is_err());
        assert!(session.has_errors());
        assert!(session.set_value(Field::AvgLeadValue, f64::NAN).is_err());
        assert_eq!(session.inputs().avg_lead_value, 0.0);
    }

    #[test]
    fn test_select_industry_clears_errors_and_keeps_schedule() {
        let mut session = Session::default();
        session.set_days_open(DaysOpen::AllDays);
        session.edit_field(Field::HumanHoursPerWeek, "30").unwrap();
        let _ = session.edit_field(Field::ConversionRate, "abc");
        assert!(session.has_errors());

        let industry = session.select_industry("dermatologia");

        assert_eq!(industry, Industry::Dermatology);
        assert!(!session.has_errors());
        assert!(session.errors().is_empty());
        assert_eq!(session.inputs().days_open, DaysOpen::AllDays);
        assert_eq!(session.inputs().human_hours_per_week, 30.0);
        assert_eq!(session.inputs().conversion_rate, 49.0);
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        let mut session = Session::new(Industry::Podiatry, Tier::Basic);
        assert_eq!(session.select_industry("bakery"), Industry::FamilyMedicine);
        assert_eq!(session.select_tier("diamond"), Tier::Professional);
        assert_eq!(session.fees(), Tier::Professional.fees());
    }

    #[test]
    fn test_select_tier_overwrites_fees() {
        let mut session = Session::default();
        session.select_tier("enterprise");
        assert_eq!(session.fees().setup_fee, 120_000.0);
        assert_eq!(session.estimate().ai_total_monthly_cost, 42_500.0);
    }

    #[test]
    fn test_from_config() {
        let config = ChatroiConfig {
            defaults: Some(DefaultsConfig {
                industry: Some("urgencias".to_string()),
                tier: Some("basic".to_string()),
                days_open: Some("weekdays".to_string()),
                human_hours_per_week: Some(20.0),
            }),
            ..Default::default()
        };
        let session = Session::from_config(&config);

        assert_eq!(session.industry(), Industry::UrgentCare);
        assert_eq!(session.tier(), Tier::Basic);
        assert_eq!(session.estimate().days_per_month, 22.0);
        assert_eq!(session.inputs().human_hours_per_week, 20.0);
    }

    #[test]
    fn test_from_config_unresolved_keys_use_catalog_defaults() {
        let config = ChatroiConfig {
            defaults: Some(DefaultsConfig {
                industry: Some("bakery".to_string()),
                tier: Some("diamond".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let session = Session::from_config(&config);

        assert_eq!(session.industry(), Industry::DEFAULT);
        assert_eq!(session.tier(), Tier::DEFAULT);
        assert_eq!(Session::from_config(&ChatroiConfig::default()).industry(), Industry::DEFAULT);
    }

    #[test]
    fn test_huge_volume_is_flagged_and_estimate_stays_finite() {
        let mut session = Session::default();
        assert_eq!(session.edit_field(Field::MissedMessageRate, "0"), Ok(0.0));
        assert!(session.edit_field(Field::BusinessHourMessages, "1e308").is_err());

        assert!(session.has_errors());
        assert_eq!(session.inputs().business_hour_messages, 1e308);
        let estimate = session.estimate();
        assert_eq!(estimate.missed_component, 0.0);
        assert!(estimate.total_messages_handled.is_finite());
        assert!(estimate.potential_revenue.is_finite());
        assert!(estimate.net_benefit.is_finite());
        assert!(matches!(estimate.roi, crate::core::Roi::Percent(r) if r.is_finite()));
    }

    #[test]
    fn test_zero_net_benefit_never_pays_back() {
        let mut session = Session::default();
        for field in Field::ALL {
            session.edit_field(field, "0").unwrap();
        }
        assert_eq!(session.estimate().payback, PaybackPeriod::Never);
    }
}
