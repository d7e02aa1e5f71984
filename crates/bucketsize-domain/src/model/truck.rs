//! Dump truck table rows

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckSpec {
    pub brand: String,
    #[serde(rename = "type")]
    pub truck_type: String,
    pub model: String,
    /// Rated payload (t)
    pub payload: Option<f64>,
}

impl TruckSpec {
    /// Rated payload in kg
    pub fn payload_kg(&self) -> Option<f64> {
        self.payload.map(|t| t * 1000.0)
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_kg() {
        let truck = TruckSpec {
            brand: "CAT".to_string(),
            truck_type: "Rigid".to_string(),
            model: "773G".to_string(),
            payload: Some(55.0),
        };
        assert_eq!(truck.payload_kg(), Some(55000.0));
        assert_eq!(truck.label(), "CAT 773G");
    }
}
