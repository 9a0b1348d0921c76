/// Solar Power Model
///
/// Derives the power cascade (panel nameplate down to usable power) and the
/// board performance that follows from it, for a chosen hardware tier and
/// season. Language never enters this module.

pub mod model;
pub mod result;
pub mod stages;

pub use model::{achieved_speed_knots, power_ratio, PowerModel};
pub use result::{Evaluation, InflationTime, PowerStageResult};
pub use stages::PowerStages;
