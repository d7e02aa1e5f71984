//! Policy constants for the sizing model

use bucketsize_types::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound on truck-fill scan steps
pub const MAX_FILL_STEPS: u32 = 100_000;

/// Tunable constants used by the optimizer, the truck-fill reconciler and
/// the productivity projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityPolicy {
    /// Derating applied to theoretical trucks per hour
    #[serde(default = "default_efficiency_factor")]
    pub efficiency_factor: f64,

    /// Multiplier for the improved-cycle-time scenario and the headline gain
    #[serde(default = "default_cycle_improvement_factor")]
    pub cycle_improvement_factor: f64,

    /// Swings per day used by the daily simulations
    #[serde(default = "default_reference_daily_swings")]
    pub reference_daily_swings: f64,

    /// How far above rated payload a truck may be filled, as a fraction
    #[serde(default = "default_fill_headroom_fraction")]
    pub fill_headroom_fraction: f64,

    /// Scan increment for truck fill, as a fraction of rated payload
    #[serde(default = "default_fill_step_fraction")]
    pub fill_step_fraction: f64,

    /// Accepted distance below the next whole swing
    #[serde(default = "default_swing_tolerance")]
    pub swing_tolerance: f64,

    /// Buckets may be at most this many class tiers above the excavator
    #[serde(default = "default_class_ceiling_offset")]
    pub class_ceiling_offset: f64,
}

fn default_efficiency_factor() -> f64 {
    0.75
}

fn default_cycle_improvement_factor() -> f64 {
    1.1
}

fn default_reference_daily_swings() -> f64 {
    1000.0
}

fn default_fill_headroom_fraction() -> f64 {
    0.10
}

fn default_fill_step_fraction() -> f64 {
    0.001
}

fn default_swing_tolerance() -> f64 {
    0.05
}

fn default_class_ceiling_offset() -> f64 {
    10.0
}

impl Default for ProductivityPolicy {
    fn default() -> Self {
        Self {
            efficiency_factor: default_efficiency_factor(),
            cycle_improvement_factor: default_cycle_improvement_factor(),
            reference_daily_swings: default_reference_daily_swings(),
            fill_headroom_fraction: default_fill_headroom_fraction(),
            fill_step_fraction: default_fill_step_fraction(),
            swing_tolerance: default_swing_tolerance(),
            class_ceiling_offset: default_class_ceiling_offset(),
        }
    }
}

impl ProductivityPolicy {
    /// Reject values that would make the model meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, f64, bool); 7] = [
            ("efficiency_factor", self.efficiency_factor, self.efficiency_factor > 0.0),
            (
                "cycle_improvement_factor",
                self.cycle_improvement_factor,
                self.cycle_improvement_factor > 0.0,
            ),
            (
                "reference_daily_swings",
                self.reference_daily_swings,
                self.reference_daily_swings >= 0.0,
            ),
            (
                "fill_headroom_fraction",
                self.fill_headroom_fraction,
                self.fill_headroom_fraction >= 0.0,
            ),
            ("fill_step_fraction", self.fill_step_fraction, self.fill_step_fraction > 0.0),
            ("swing_tolerance", self.swing_tolerance, self.swing_tolerance >= 0.0),
            (
                "class_ceiling_offset",
                self.class_ceiling_offset,
                self.class_ceiling_offset.is_finite(),
            ),
        ];

        for (field, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(ConfigError::InvalidPolicy { field, value });
            }
        }

        if self.fill_headroom_fraction / self.fill_step_fraction > MAX_FILL_STEPS as f64 {
            return Err(ConfigError::InvalidPolicy {
                field: "fill_step_fraction",
                value: self.fill_step_fraction,
            });
        }
        Ok(())
    }

    /// Number of whole fill steps that stay at or below the fill ceiling.
    ///
    /// A step that doesn't divide the headroom evenly stops short of the
    /// ceiling rather than past it.
    pub fn fill_steps(&self) -> u32 {
        let steps = (self.fill_headroom_fraction / self.fill_step_fraction + 1e-9).floor();
        if steps.is_nan() || steps <= 0.0 {
            0
        } else {
            steps.min(MAX_FILL_STEPS as f64) as u32
        }
    }

    /// Improvement as a whole percentage, e.g. 10 for a factor of 1.1
    pub fn cycle_improvement_percent(&self) -> f64 {
        (self.cycle_improvement_factor - 1.0) * 100.0
    }
}
