//! Fixed physical and calibration constants shared by every evaluation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::selection::HardwareTier;

/// Nameplate rating of the reference panel every tier is normalized against (W)
pub const REFERENCE_PANEL_RATED_WATTS: f64 = 150.0;

/// Conversion efficiency of the reference panel
pub const REFERENCE_PANEL_EFFICIENCY: f64 = 0.15;

/// Miscellaneous losses applied after temperature derating.
/// Product calibration, not derived from a physical law.
pub const MISC_LOSS_FACTOR: f64 = 0.9;

/// Displacement hull speed: knots = 1.34 * sqrt(waterline length in ft)
pub const HULL_SPEED_FACTOR: f64 = 1.34;

/// Exponent of the sub-linear power-to-speed curve
pub const SPEED_EXPONENT: f64 = 0.33;

pub const KNOTS_TO_KMH: f64 = 1.852;

/// Scalar constants of the board and drivetrain.
///
/// Missing fields deserialize to the defaults, so a config file only has to
/// name the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_finite"))]
pub struct PhysicalConstants {
    /// SUP hull length (ft)
    #[validate(range(exclusive_min = 0.0, max = 100.0))]
    pub sup_length_ft: f64,

    /// Rider, board and gear (kg)
    #[validate(range(exclusive_min = 0.0, max = 1000.0))]
    pub total_mass_kg: f64,

    #[validate(range(exclusive_min = 0.0, max = 1000.0))]
    pub hull_coefficient: f64,

    /// Sea water (kg/m³)
    #[validate(range(exclusive_min = 0.0, max = 2000.0))]
    pub water_density_kg_m3: f64,

    /// Inflation time at a pump draw equal to the available power (minutes)
    #[validate(range(min = 0.0, max = 600.0))]
    pub base_inflation_time_min: f64,

    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub prop_efficiency_budget: f64,

    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub prop_efficiency_premium: f64,

    /// Shaft power at which the motor reaches its rated top speed (W)
    #[validate(range(exclusive_min = 0.0, max = 100_000.0))]
    pub full_power_consumption_w: f64,

    #[validate(range(exclusive_min = 0.0, max = 10.0))]
    pub mph_to_knots: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            sup_length_ft: 11.6,
            total_mass_kg: 80.0,
            hull_coefficient: 15.0,
            water_density_kg_m3: 1025.0,
            base_inflation_time_min: 2.5,
            prop_efficiency_budget: 0.55,
            prop_efficiency_premium: 0.70,
            // Matched to the Bixpy J-2 rated draw
            full_power_consumption_w: 450.0,
            mph_to_knots: 0.868976,
        }
    }
}

impl PhysicalConstants {
    fn values(&self) -> [f64; 9] {
        [
            self.sup_length_ft,
            self.total_mass_kg,
            self.hull_coefficient,
            self.water_density_kg_m3,
            self.base_inflation_time_min,
            self.prop_efficiency_budget,
            self.prop_efficiency_premium,
            self.full_power_consumption_w,
            self.mph_to_knots,
        ]
    }

    /// Propeller efficiency for a tier (season independent)
    pub fn propeller_efficiency(&self, tier: HardwareTier) -> f64 {
        match tier {
            HardwareTier::Budget => self.prop_efficiency_budget,
            HardwareTier::Premium => self.prop_efficiency_premium,
        }
    }

    /// Theoretical displacement hull speed (knots)
    pub fn hull_speed_knots(&self) -> f64 {
        HULL_SPEED_FACTOR * self.sup_length_ft.sqrt()
    }
}

// Range checks compare with < and >, which NaN slips past
fn validate_finite(constants: &PhysicalConstants) -> Result<(), ValidationError> {
    if constants.values().iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_constant"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(PhysicalConstants::default().validate().is_ok());
    }

    #[test]
    fn test_propeller_efficiency_per_tier() {
        let constants = PhysicalConstants::default();
        assert_eq!(constants.propeller_efficiency(HardwareTier::Budget), 0.55);
        assert_eq!(constants.propeller_efficiency(HardwareTier::Premium), 0.70);
    }

    #[test]
    fn test_hull_speed() {
        let constants = PhysicalConstants::default();
        // 1.34 * sqrt(11.6) = 4.5638...
        assert!((constants.hull_speed_knots() - 4.5638).abs() < 0.001);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut constants = PhysicalConstants::default();
        constants.prop_efficiency_premium = 1.5;
        assert!(constants.validate().is_err());

        let mut constants = PhysicalConstants::default();
        constants.full_power_consumption_w = 0.0;
        assert!(constants.validate().is_err());

        let mut constants = PhysicalConstants::default();
        constants.sup_length_ft = -3.0;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_values() {
        for value in [f64::INFINITY, f64::NAN] {
            let mut constants = PhysicalConstants::default();
            constants.sup_length_ft = value;
            assert!(constants.validate().is_err(), "sup_length_ft = {value}");

            let mut constants = PhysicalConstants::default();
            constants.full_power_consumption_w = value;
            assert!(constants.validate().is_err(), "full_power_consumption_w = {value}");

            let mut constants = PhysicalConstants::default();
            constants.base_inflation_time_min = value;
            assert!(constants.validate().is_err(), "base_inflation_time_min = {value}");

            let mut constants = PhysicalConstants::default();
            constants.mph_to_knots = value;
            assert!(constants.validate().is_err(), "mph_to_knots = {value}");
        }
    }

    #[test]
    fn test_infinite_length_rejected_by_model() {
        let constants = PhysicalConstants {
            sup_length_ft: f64::INFINITY,
            ..PhysicalConstants::default()
        };
        assert!(crate::power_model::PowerModel::new(constants).is_err());
    }
}
