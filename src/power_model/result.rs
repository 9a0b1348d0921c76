use serde::{Deserialize, Serialize};

use super::stages::PowerStages;
use crate::domain::{Selection, KNOTS_TO_KMH};

/// Pump inflation time. Undefined when no final power is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Option<f64>", from = "Option<f64>")]
pub enum InflationTime {
    Minutes(f64),
    Undefined,
}

impl InflationTime {
    /// Inflation time for a pump draw against the available final power
    pub fn from_power(pump_draw_w: f64, final_w: f64, base_minutes: f64) -> Self {
        if final_w > 0.0 {
            let minutes = pump_draw_w / final_w * base_minutes;
            if minutes.is_finite() {
                return InflationTime::Minutes(minutes);
            }
        }
        InflationTime::Undefined
    }

    pub fn minutes(&self) -> Option<f64> {
        match self {
            InflationTime::Minutes(m) => Some(*m),
            InflationTime::Undefined => None,
        }
    }
}

impl From<InflationTime> for Option<f64> {
    fn from(time: InflationTime) -> Self {
        time.minutes()
    }
}

impl From<Option<f64>> for InflationTime {
    fn from(minutes: Option<f64>) -> Self {
        minutes.map_or(InflationTime::Undefined, InflationTime::Minutes)
    }
}

/// Everything derived from one (tier, season) pair
///
/// Values are not rounded; rounding is left to the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerStageResult {
    #[serde(flatten)]
    pub stages: PowerStages,

    /// Displacement hull speed limit (knots)
    pub hull_speed_knots: f64,

    pub achieved_speed_knots: f64,

    /// Shaft power after motor and propeller losses (W)
    pub mechanical_power_w: f64,

    pub inflation_time: InflationTime,

    pub motor_efficiency_pct: f64,

    pub thrust_lbs: f64,

    /// Share of the full-power reference actually available (0-100)
    pub power_ratio_pct: f64,

    pub motor_weight_kg: f64,

    /// Propeller efficiency (fraction)
    pub propeller_efficiency: f64,

    pub panel_area_m2: f64,
}

impl PowerStageResult {
    pub fn achieved_speed_kmh(&self) -> f64 {
        self.achieved_speed_knots * KNOTS_TO_KMH
    }

    /// Power ratio as a fraction in [0, 1]
    pub fn power_ratio(&self) -> f64 {
        self.power_ratio_pct / 100.0
    }
}

/// A selection together with its computed result and bundle cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub selection: Selection,
    pub result: PowerStageResult,
    pub total_cost_usd: u32,
}
