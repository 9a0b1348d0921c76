//! # SUP Solar Estimator
//!
//! Estimates what a solar-electric conversion of an inflatable stand-up
//! paddleboard can do: how much panel power survives the controller, wiring
//! and heat losses, how fast the board goes on it, how long the pump takes,
//! and what the hardware costs. Two hardware tiers, two seasons, two display
//! languages.
//!
//! ```rust
//! use sup_solar_estimator::domain::{HardwareTier, Season};
//! use sup_solar_estimator::power_model::PowerModel;
//!
//! let model = PowerModel::default();
//! let result = model.compute_stages(HardwareTier::Budget, Season::Winter);
//! assert!((result.stages.final_w - 59.322375).abs() < 1e-9);
//! assert_eq!(model.total_cost(HardwareTier::Budget), 740);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod power_model;
pub mod report;
pub mod telemetry;

pub use error::{EstimatorError, Result};
