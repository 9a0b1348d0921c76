use serde::{Deserialize, Serialize};

/// The power cascade from nameplate rating to usable power (W)
///
/// Each stage multiplies the previous by one more efficiency factor:
/// rated -> seasonal -> after controller -> after wiring -> temperature -> final
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerStages {
    /// Reference nameplate scaled by panel efficiency (season independent)
    pub rated_w: f64,
    pub seasonal_w: f64,
    pub after_controller_w: f64,
    pub after_wiring_w: f64,
    pub temp_adjusted_w: f64,
    pub final_w: f64,
}

impl PowerStages {
    /// Stage values in cascade order
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.rated_w,
            self.seasonal_w,
            self.after_controller_w,
            self.after_wiring_w,
            self.temp_adjusted_w,
            self.final_w,
        ]
    }

    /// Check that no stage exceeds its predecessor and none is negative
    pub fn is_monotonic(&self) -> bool {
        let values = self.as_array();
        values.windows(2).all(|pair| pair[1] <= pair[0]) && values.iter().all(|v| *v >= 0.0)
    }

    /// Total loss from rated to final (W)
    pub fn total_loss_w(&self) -> f64 {
        self.rated_w - self.final_w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages(values: [f64; 6]) -> PowerStages {
        PowerStages {
            rated_w: values[0],
            seasonal_w: values[1],
            after_controller_w: values[2],
            after_wiring_w: values[3],
            temp_adjusted_w: values[4],
            final_w: values[5],
        }
    }

    #[test]
    fn test_monotonic_cascade() {
        let s = stages([150.0, 105.0, 78.75, 73.2375, 65.91375, 59.322375]);
        assert!(s.is_monotonic());
        assert!((s.total_loss_w() - 90.677625).abs() < 1e-9);
    }

    #[test]
    fn test_non_monotonic_detected() {
        let s = stages([150.0, 160.0, 78.0, 70.0, 60.0, 50.0]);
        assert!(!s.is_monotonic());
    }

    #[test]
    fn test_negative_detected() {
        let s = stages([0.0, 0.0, 0.0, 0.0, 0.0, -1.0]);
        assert!(!s.is_monotonic());
    }
}
