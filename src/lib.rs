// Export modules for library usage
pub mod catalog;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod estimator;
pub mod formatting;
pub mod insights;
pub mod io;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use crate::catalog::{
    get_preset, get_tier, industry_options, preset_inputs, tier_options, Industry,
    IndustryPreset, PricingTier, Tier,
};
pub use crate::core::{DaysOpen, Estimate, EstimateInputs, PaybackPeriod, Roi, TierFees};
pub use crate::errors::{Error, Result};
pub use crate::estimator::compute;
pub use crate::formatting::{format_payback, format_payback_months, Language};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Report};
pub use crate::session::Session;
pub use crate::validation::{parse_field, Field, FieldError, FieldErrors, FieldValue};
