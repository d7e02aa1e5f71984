//! Sizing request

use bucketsize_types::{CatalogVariant, Error};
use serde::{Deserialize, Serialize};

use super::ExcavatorSelector;

/// Everything needed for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    pub excavator: ExcavatorSelector,
    /// Material density (kg/m³)
    pub material_density: f64,
    /// Quick hitch weight (kg), 0 when no hitch is fitted
    #[serde(default)]
    pub quick_hitch_weight: f64,
    /// Current bucket capacity (m³), 0 when there is no current bucket
    #[serde(default)]
    pub current_bucket_size: f64,
    /// Current bucket empty weight (kg)
    #[serde(default)]
    pub current_bucket_weight: f64,
    /// Dump truck rated payload (t)
    pub truck_payload_tonnes: f64,
    /// Dump truck name for report rows, e.g. "CAT 773G"
    #[serde(default)]
    pub truck_label: Option<String>,
    /// Machine swings per minute
    pub swings_per_minute: f64,
    #[serde(default)]
    pub catalog: CatalogVariant,
}

impl SizingRequest {
    /// Dump truck rated payload in kg
    pub fn truck_payload_kg(&self) -> f64 {
        self.truck_payload_tonnes * 1000.0
    }

    /// Truck name, or a generic label when none was given
    pub fn truck_label(&self) -> &str {
        self.truck_label.as_deref().unwrap_or("Dump Truck")
    }

    /// Check every numeric input is finite and non-negative
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("material density", self.material_density),
            ("quick hitch weight", self.quick_hitch_weight),
            ("current bucket size", self.current_bucket_size),
            ("current bucket weight", self.current_bucket_weight),
            ("truck payload", self.truck_payload_tonnes),
            ("swings per minute", self.swings_per_minute),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SizingRequest {
        SizingRequest {
            excavator: ExcavatorSelector {
                make: "CAT".to_string(),
                model: "336".to_string(),
                boom_length: 6.5,
                arm_length: 3.2,
                cwt: 7100.0,
                shoe_width: 600.0,
                reach: 6.0,
            },
            material_density: 1800.0,
            quick_hitch_weight: 0.0,
            current_bucket_size: 1.9,
            current_bucket_weight: 1700.0,
            truck_payload_tonnes: 40.0,
            truck_label: None,
            swings_per_minute: 3.0,
            catalog: CatalogVariant::Standard,
        }
    }

    #[test]
    fn test_truck_payload_kg() {
        assert_eq!(request().truck_payload_kg(), 40000.0);
    }

    #[test]
    fn test_truck_label_fallback() {
        let mut r = request();
        assert_eq!(r.truck_label(), "Dump Truck");
        r.truck_label = Some("CAT 773G".to_string());
        assert_eq!(r.truck_label(), "CAT 773G");
    }

    #[test]
    fn test_validate_ok() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_negative_density() {
        let mut r = request();
        r.material_density = -1.0;
        let err = r.validate().unwrap_err();
        assert!(err.to_string().contains("material density"));
    }

    #[test]
    fn test_validate_nan_swing_rate() {
        let mut r = request();
        r.swings_per_minute = f64::NAN;
        assert!(r.validate().is_err());
    }
}
