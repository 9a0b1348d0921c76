use itertools::iproduct;
use strum::IntoEnumIterator;
use tracing::{debug, warn};
use validator::Validate;

use super::result::{Evaluation, InflationTime, PowerStageResult};
use super::stages::PowerStages;
use crate::domain::{
    ComponentBundle, HardwareTier, Language, PhysicalConstants, Season, Selection, SolarCondition,
    MISC_LOSS_FACTOR, REFERENCE_PANEL_EFFICIENCY, REFERENCE_PANEL_RATED_WATTS, SPEED_EXPONENT,
};
use crate::error::Result;

/// Fraction of the full-power reference that the available shaft power covers, clamped to [0, 1]
pub fn power_ratio(mechanical_power_w: f64, full_power_w: f64) -> f64 {
    (mechanical_power_w / full_power_w).clamp(0.0, 1.0)
}

/// Speed reached at a given power ratio.
///
/// Sub-linear: half the power still gives ~80% of top speed.
pub fn achieved_speed_knots(max_speed_knots: f64, power_ratio: f64) -> f64 {
    max_speed_knots * power_ratio.powf(SPEED_EXPONENT)
}

/// Power Model
///
/// Turns a (tier, season) pair into the power cascade and the performance
/// figures derived from it. Pure and deterministic: every call recomputes
/// from the fixed component bundles, the seasonal conditions and the
/// physical constants held by the model.
#[derive(Debug, Clone, Default)]
pub struct PowerModel {
    constants: PhysicalConstants,
}

impl PowerModel {
    /// Create a model with custom constants, rejecting out-of-range values
    pub fn new(constants: PhysicalConstants) -> Result<Self> {
        constants.validate()?;
        Ok(Self { constants })
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Compute the power cascade and performance figures
    ///
    /// Algorithm steps:
    /// 1. Resolve the component bundle and the solar condition
    /// 2. Scale the reference 150 W nameplate by panel efficiency / 0.15
    /// 3. Apply sunlight, controller, wiring, temperature and misc losses in turn
    /// 4. Hull speed limit from hull length only
    /// 5. Shaft power = final * motor efficiency * propeller efficiency
    /// 6. Power ratio against the full-power reference, clamped at 1
    /// 7. Achieved speed = motor max speed * ratio^0.33
    /// 8. Inflation time = pump draw / final * base time (undefined at zero power)
    pub fn compute_stages(&self, tier: HardwareTier, season: Season) -> PowerStageResult {
        let bundle = ComponentBundle::for_tier(tier);
        let conditions = SolarCondition::for_season(season);

        let stages = Self::cascade(bundle, conditions);

        let hull_speed_knots = self.constants.hull_speed_knots();

        let propeller_efficiency = self.constants.propeller_efficiency(tier);
        let mechanical_power_w = stages.final_w * bundle.motor.efficiency * propeller_efficiency;

        let ratio = power_ratio(mechanical_power_w, self.constants.full_power_consumption_w);
        let achieved = achieved_speed_knots(bundle.motor.max_speed_knots, ratio);

        let inflation_time = InflationTime::from_power(
            bundle.pump.power_draw_w,
            stages.final_w,
            self.constants.base_inflation_time_min,
        );
        if inflation_time == InflationTime::Undefined {
            warn!(%tier, %season, final_w = stages.final_w, "no final power available, inflation time undefined");
        }

        debug!(
            %tier,
            %season,
            final_w = stages.final_w,
            mechanical_power_w,
            achieved_speed_knots = achieved,
            "computed power stages"
        );

        PowerStageResult {
            stages,
            hull_speed_knots,
            achieved_speed_knots: achieved,
            mechanical_power_w,
            inflation_time,
            motor_efficiency_pct: bundle.motor.efficiency * 100.0,
            thrust_lbs: bundle.motor.thrust_lbs,
            power_ratio_pct: ratio * 100.0,
            motor_weight_kg: bundle.motor.weight_kg,
            propeller_efficiency,
            panel_area_m2: bundle.panel.area_m2,
        }
    }

    /// Sum of the five component prices for a tier (USD)
    pub fn total_cost(&self, tier: HardwareTier) -> u32 {
        ComponentBundle::for_tier(tier).total_price_usd()
    }

    /// Evaluate a full selection. Language is carried through untouched.
    pub fn evaluate(&self, selection: &Selection) -> Evaluation {
        Evaluation {
            selection: *selection,
            result: self.compute_stages(selection.tier, selection.season),
            total_cost_usd: self.total_cost(selection.tier),
        }
    }

    /// Evaluate every (tier, season) pair in the given language,
    /// ordered tier-major: budget/winter, budget/summer, premium/winter, premium/summer
    pub fn evaluate_all(&self, language: Language) -> Vec<Evaluation> {
        iproduct!(HardwareTier::iter(), Season::iter())
            .map(|(tier, season)| self.evaluate(&Selection::new(tier, season, language)))
            .collect()
    }

    fn cascade(bundle: &ComponentBundle, conditions: &SolarCondition) -> PowerStages {
        // Every tier is normalized against the reference panel, not its own wattage
        let panel_scaling = bundle.panel.efficiency / REFERENCE_PANEL_EFFICIENCY;

        let rated_w = REFERENCE_PANEL_RATED_WATTS * panel_scaling;
        let seasonal_w = rated_w * conditions.sunlight_factor;
        let after_controller_w = seasonal_w * bundle.controller.efficiency;
        let after_wiring_w = after_controller_w * bundle.wiring.efficiency;
        let temp_adjusted_w = after_wiring_w * conditions.temperature_efficiency;
        let final_w = temp_adjusted_w * MISC_LOSS_FACTOR;

        PowerStages {
            rated_w,
            seasonal_w,
            after_controller_w,
            after_wiring_w,
            temp_adjusted_w,
            final_w,
        }
    }
}
