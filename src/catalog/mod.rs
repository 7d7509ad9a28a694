//! Fixed catalog of industry profiles and pricing tiers.
//!
//! Both tables are closed enumerations compiled into the binary. Lookups by
//! key never fail: an unknown key resolves to the designated default entry
//! (see [`Industry::lookup`] and [`Tier::lookup`]).

pub mod industries;
pub mod tiers;

pub use industries::{Industry, IndustryPreset};
pub use tiers::{PricingTier, Tier};

use serde::Serialize;

use crate::core::{EstimateInputs, TierFees};

/// Preset defaults for a key, falling back to the default industry.
pub fn get_preset(industry_key: &str) -> IndustryPreset {
    Industry::lookup(industry_key).preset()
}

/// Fee pair for a key, falling back to the default tier.
pub fn get_tier(tier_key: &str) -> TierFees {
    Tier::lookup(tier_key).fees()
}

/// Input record seeded from an industry key.
pub fn preset_inputs(industry_key: &str) -> EstimateInputs {
    get_preset(industry_key).to_inputs()
}

/// Selector entry for an industry profile.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryOption {
    pub key: &'static str,
    pub name: &'static str,
    pub is_default: bool,
    pub preset: IndustryPreset,
    pub initial_conversion_rate: f64,
}

/// Selector entry for a pricing tier.
#[derive(Debug, Clone, Serialize)]
pub struct TierOption {
    #[serde(flatten)]
    pub pricing: PricingTier,
    pub is_default: bool,
}

pub fn industry_options() -> Vec<IndustryOption> {
    Industry::ALL
        .iter()
        .map(|&industry| {
            let preset = industry.preset();
            IndustryOption {
                key: industry.key(),
                name: industry.display_name(),
                is_default: industry == Industry::DEFAULT,
                initial_conversion_rate: preset.initial_conversion_rate(),
                preset,
            }
        })
        .collect()
}

pub fn tier_options() -> Vec<TierOption> {
    Tier::ALL
        .iter()
        .map(|&tier| TierOption {
            pricing: tier.pricing(),
            is_default: tier == Tier::DEFAULT,
        })
        .collect()
}
