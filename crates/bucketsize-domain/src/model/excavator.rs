//! Excavator SWL table rows

use serde::{Deserialize, Serialize};

/// One row of the excavator SWL table
///
/// Numeric columns are `None` when the source cell could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcavatorRecord {
    pub make: String,
    pub model: String,
    /// Boom length (m)
    pub boom_length: Option<f64>,
    /// Arm length (m)
    pub arm_length: Option<f64>,
    /// Counterweight (kg)
    pub cwt: Option<f64>,
    /// Track shoe width (mm)
    pub shoe_width: Option<f64>,
    /// Operating reach (m)
    pub reach: Option<f64>,
    /// Size class tier
    pub class: Option<f64>,
    /// Safe working load at `reach` (kg)
    pub swl: Option<f64>,
}

/// A fully specified excavator configuration chosen by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcavatorSelector {
    pub make: String,
    pub model: String,
    pub boom_length: f64,
    pub arm_length: f64,
    pub cwt: f64,
    pub shoe_width: f64,
    pub reach: f64,
}

impl ExcavatorRecord {
    /// Exact match on all seven identifying fields.
    ///
    /// A null numeric cell never matches.
    pub fn matches(&self, selector: &ExcavatorSelector) -> bool {
        self.make == selector.make
            && self.model == selector.model
            && self.boom_length == Some(selector.boom_length)
            && self.arm_length == Some(selector.arm_length)
            && self.cwt == Some(selector.cwt)
            && self.shoe_width == Some(selector.shoe_width)
            && self.reach == Some(selector.reach)
    }
}

impl ExcavatorSelector {
    /// "Calculations based on ..." sentence for report summaries
    pub fn describe(&self) -> String {
        format!(
            "{} {} with a {}m boom, {}m arm, {}kg counterweight, {}mm shoes at {}m reach",
            self.make,
            self.model,
            self.boom_length,
            self.arm_length,
            self.cwt,
            self.shoe_width,
            self.reach
        )
    }
}
