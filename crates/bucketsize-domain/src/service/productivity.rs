//! Haul-cycle productivity projection
//!
//! Hourly and daily throughput for one bucket, given its reconciled truck
//! fill. Every division is guarded: a zero swing rate, an empty bucket or a
//! zero truck payload yields zero throughput instead of inf/NaN.

use serde::{Deserialize, Serialize};

use super::bucket_optimizer::bucket_payload;
use super::truck_fill::{reconcile_truck_fill, TruckFill};
use crate::model::ProductivityPolicy;

/// Operating inputs shared by the old and new bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingConditions {
    /// Material density (kg/m³)
    pub material_density: f64,
    /// Machine swings per minute
    pub swings_per_minute: f64,
    /// Dump truck rated payload (kg)
    pub truck_payload: f64,
}

/// Output of a fixed number of swings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySimulation {
    pub swings: f64,
    pub volume_m3: f64,
    pub tonnes: f64,
    pub trucks: f64,
}

impl DailySimulation {
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            swings: self.swings * factor,
            volume_m3: self.volume_m3 * factor,
            tonnes: self.tonnes * factor,
            trucks: self.trucks * factor,
        }
    }
}

/// All derived metrics for one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketProjection {
    /// Capacity (m³)
    pub capacity: f64,
    /// Material per swing (kg)
    pub payload: f64,
    /// Hitch + material + empty bucket (kg)
    pub total_suspended_load: f64,
    pub truck_fill: TruckFill,
    /// Minutes to fill one truck, `None` when undefined
    pub time_to_fill: Option<f64>,
    /// Trucks per hour after the efficiency derating
    pub trucks_per_hour: f64,
    pub swings_per_hour: f64,
    /// Tonnes per hour moved into trucks
    pub truck_tonnage_per_hour: f64,
    /// Tonnes per hour if every minute were spent swinging
    pub total_tonnage_per_hour: f64,
    /// Trucks per hour × effective truck payload (t)
    pub loaded_tonnage_per_hour: f64,
    pub daily: DailySimulation,
}

impl BucketProjection {
    pub fn swings_to_fill(&self) -> f64 {
        self.truck_fill.swings_to_fill.unwrap_or(0.0)
    }
}

/// Project the throughput of one bucket
pub fn project_bucket(
    capacity: f64,
    total_suspended_load: f64,
    conditions: &OperatingConditions,
    policy: &ProductivityPolicy,
) -> BucketProjection {
    let density = conditions.material_density;
    let payload = bucket_payload(capacity, density);
    let truck_fill = reconcile_truck_fill(conditions.truck_payload, payload, policy);

    let time_to_fill = match truck_fill.swings_to_fill {
        Some(swings) if conditions.swings_per_minute > 0.0 => {
            Some(swings / conditions.swings_per_minute)
        }
        _ => None,
    };

    let trucks_per_hour = match time_to_fill {
        Some(minutes) if minutes > 0.0 => (60.0 / minutes) * policy.efficiency_factor,
        _ => 0.0,
    };

    let swings_per_hour = truck_fill.swings_to_fill.unwrap_or(0.0) * trucks_per_hour;
    let truck_tonnage_per_hour = swings_per_hour * capacity * density / 1000.0;
    let total_tonnage_per_hour = 60.0 * conditions.swings_per_minute * capacity * density / 1000.0;
    let loaded_tonnage_per_hour = trucks_per_hour * truck_fill.effective_payload / 1000.0;

    BucketProjection {
        capacity,
        payload,
        total_suspended_load,
        truck_fill,
        time_to_fill,
        trucks_per_hour,
        swings_per_hour,
        truck_tonnage_per_hour,
        total_tonnage_per_hour,
        loaded_tonnage_per_hour,
        daily: simulate_daily(capacity, conditions, policy),
    }
}

/// Volume, tonnes and trucks for the reference number of swings
pub fn simulate_daily(
    capacity: f64,
    conditions: &OperatingConditions,
    policy: &ProductivityPolicy,
) -> DailySimulation {
    let swings = policy.reference_daily_swings;
    let volume_m3 = swings * capacity;
    let tonnes = volume_m3 * conditions.material_density / 1000.0;
    let trucks = if conditions.truck_payload > 0.0 {
        tonnes / conditions.truck_payload * 1000.0
    } else {
        0.0
    };

    DailySimulation {
        swings,
        volume_m3,
        tonnes,
        trucks,
    }
}

/// Headline gain, assuming the cycle-time improvement is realised
pub fn productivity_gain_percent(
    old: &BucketProjection,
    new: &BucketProjection,
    policy: &ProductivityPolicy,
) -> Option<f64> {
    percent_difference(
        old.total_tonnage_per_hour,
        policy.cycle_improvement_factor * new.total_tonnage_per_hour,
    )
}

/// `(new - old) / old × 100`, `None` against a zero or undefined baseline
pub fn percent_difference(old: f64, new: f64) -> Option<f64> {
    if old == 0.0 || !old.is_finite() || !new.is_finite() {
        None
    } else {
        Some((new - old) / old * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(swing_rate: f64) -> OperatingConditions {
        OperatingConditions {
            material_density: 2000.0,
            swings_per_minute: swing_rate,
            truck_payload: 40000.0,
        }
    }

    #[test]
    fn test_projection_values() {
        let policy = ProductivityPolicy::default();
        // 2.0m³ × 2000 = 4000kg per swing, 10 swings exactly
        let p = project_bucket(2.0, 6000.0, &conditions(2.0), &policy);
        assert_eq!(p.payload, 4000.0);
        assert_eq!(p.swings_to_fill(), 10.0);
        assert_eq!(p.time_to_fill, Some(5.0));
        assert!((p.trucks_per_hour - 9.0).abs() < 1e-9);
        assert!((p.swings_per_hour - 90.0).abs() < 1e-9);
        assert!((p.truck_tonnage_per_hour - 360.0).abs() < 1e-9);
        assert!((p.total_tonnage_per_hour - 480.0).abs() < 1e-9);
        assert!((p.loaded_tonnage_per_hour - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_simulation() {
        let policy = ProductivityPolicy::default();
        let daily = simulate_daily(2.0, &conditions(2.0), &policy);
        assert_eq!(daily.swings, 1000.0);
        assert_eq!(daily.volume_m3, 2000.0);
        assert_eq!(daily.tonnes, 4000.0);
        assert!((daily.trucks - 100.0).abs() < 1e-9);

        let improved = daily.scaled(policy.cycle_improvement_factor);
        assert!((improved.swings - 1100.0).abs() < 1e-9);
        assert!((improved.trucks - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_swing_rate() {
        let policy = ProductivityPolicy::default();
        let p = project_bucket(2.0, 6000.0, &conditions(0.0), &policy);
        assert_eq!(p.time_to_fill, None);
        assert_eq!(p.trucks_per_hour, 0.0);
        assert_eq!(p.swings_per_hour, 0.0);
        assert_eq!(p.truck_tonnage_per_hour, 0.0);
        assert_eq!(p.total_tonnage_per_hour, 0.0);
    }

    #[test]
    fn test_empty_bucket() {
        let policy = ProductivityPolicy::default();
        let p = project_bucket(0.0, 0.0, &conditions(3.0), &policy);
        assert_eq!(p.payload, 0.0);
        assert_eq!(p.truck_fill.swings_to_fill, None);
        assert_eq!(p.time_to_fill, None);
        assert_eq!(p.trucks_per_hour, 0.0);
        assert_eq!(p.daily.tonnes, 0.0);
    }

    #[test]
    fn test_zero_truck_payload_daily_trucks() {
        let policy = ProductivityPolicy::default();
        let c = OperatingConditions {
            truck_payload: 0.0,
            ..conditions(2.0)
        };
        let p = project_bucket(2.0, 6000.0, &c, &policy);
        assert_eq!(p.daily.trucks, 0.0);
        assert_eq!(p.trucks_per_hour, 0.0);
    }

    #[test]
    fn test_productivity_gain() {
        let policy = ProductivityPolicy::default();
        let old = project_bucket(2.0, 5000.0, &conditions(2.0), &policy);
        let new = project_bucket(2.5, 6000.0, &conditions(2.0), &policy);
        // (1.1 × 600 - 480) / 480 × 100 = 37.5
        let gain = productivity_gain_percent(&old, &new, &policy).unwrap();
        assert!((gain - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_productivity_gain_zero_baseline() {
        let policy = ProductivityPolicy::default();
        let old = project_bucket(0.0, 0.0, &conditions(2.0), &policy);
        let new = project_bucket(2.5, 6000.0, &conditions(2.0), &policy);
        assert_eq!(productivity_gain_percent(&old, &new, &policy), None);
    }

    #[test]
    fn test_percent_difference() {
        assert_eq!(percent_difference(100.0, 125.0), Some(25.0));
        assert_eq!(percent_difference(0.0, 125.0), None);
        assert_eq!(percent_difference(100.0, f64::NAN), None);
    }
}
