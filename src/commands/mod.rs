//! CLI command implementations for chatroi.
//!
//! Available commands:
//! - **estimate**: Run the ROI estimate and write a report
//! - **industries** / **tiers**: List the catalog
//! - **payback**: Format a month count as a payback period
//! - **init**: Write a default configuration file

pub mod catalog;
pub mod estimate;
pub mod init;
pub mod payback;

pub use catalog::{write_industries, write_tiers};
pub use estimate::{build_session, handle_estimate, EstimateConfig};
pub use init::init_config;
pub use payback::write_payback;
