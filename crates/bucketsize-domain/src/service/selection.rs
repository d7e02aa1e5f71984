//! Cascading equipment selection
//!
//! Each selector field narrows the rows offered for the next one, so only
//! configurations that exist in the catalog can be submitted.

use serde::{Deserialize, Serialize};

use crate::model::{ExcavatorRecord, ExcavatorSelector, TruckSpec};

/// Excavator fields in the order they are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcavatorField {
    Make,
    Model,
    BoomLength,
    ArmLength,
    Cwt,
    ShoeWidth,
    Reach,
}

impl ExcavatorField {
    pub fn label(&self) -> &'static str {
        match self {
            ExcavatorField::Make => "Excavator Make",
            ExcavatorField::Model => "Excavator Model",
            ExcavatorField::BoomLength => "Boom Length (m)",
            ExcavatorField::ArmLength => "Arm Length (m)",
            ExcavatorField::Cwt => "Counterweight (CWT in kg)",
            ExcavatorField::ShoeWidth => "Shoe Width (mm)",
            ExcavatorField::Reach => "Operating Reach (m)",
        }
    }
}

/// Partially chosen excavator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialExcavator {
    pub make: Option<String>,
    pub model: Option<String>,
    pub boom_length: Option<f64>,
    pub arm_length: Option<f64>,
    pub cwt: Option<f64>,
    pub shoe_width: Option<f64>,
    pub reach: Option<f64>,
}

impl PartialExcavator {
    /// First field not chosen yet, in cascade order
    pub fn next_field(&self) -> Option<ExcavatorField> {
        if self.make.is_none() {
            Some(ExcavatorField::Make)
        } else if self.model.is_none() {
            Some(ExcavatorField::Model)
        } else if self.boom_length.is_none() {
            Some(ExcavatorField::BoomLength)
        } else if self.arm_length.is_none() {
            Some(ExcavatorField::ArmLength)
        } else if self.cwt.is_none() {
            Some(ExcavatorField::Cwt)
        } else if self.shoe_width.is_none() {
            Some(ExcavatorField::ShoeWidth)
        } else if self.reach.is_none() {
            Some(ExcavatorField::Reach)
        } else {
            None
        }
    }

    /// The complete selector, once every field is chosen
    pub fn complete(&self) -> Option<ExcavatorSelector> {
        Some(ExcavatorSelector {
            make: self.make.clone()?,
            model: self.model.clone()?,
            boom_length: self.boom_length?,
            arm_length: self.arm_length?,
            cwt: self.cwt?,
            shoe_width: self.shoe_width?,
            reach: self.reach?,
        })
    }

    fn admits(&self, record: &ExcavatorRecord) -> bool {
        fn numeric(chosen: Option<f64>, cell: Option<f64>) -> bool {
            chosen.is_none() || chosen == cell
        }

        self.make.as_ref().map_or(true, |m| *m == record.make)
            && self.model.as_ref().map_or(true, |m| *m == record.model)
            && numeric(self.boom_length, record.boom_length)
            && numeric(self.arm_length, record.arm_length)
            && numeric(self.cwt, record.cwt)
            && numeric(self.shoe_width, record.shoe_width)
            && numeric(self.reach, record.reach)
    }
}

/// A value offered for a selector field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::Number(n) => write!(f, "{}", n),
        }
    }
}

fn push_unique(values: &mut Vec<OptionValue>, value: OptionValue) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Distinct values, in catalog order, for the next unchosen field.
///
/// Returns `None` when the configuration is already complete. Null numeric
/// cells are not offered.
pub fn excavator_options(
    excavators: &[ExcavatorRecord],
    partial: &PartialExcavator,
) -> Option<(ExcavatorField, Vec<OptionValue>)> {
    let field = partial.next_field()?;
    let mut values = Vec::new();

    for record in excavators.iter().filter(|r| partial.admits(r)) {
        let value = match field {
            ExcavatorField::Make => Some(OptionValue::Text(record.make.clone())),
            ExcavatorField::Model => Some(OptionValue::Text(record.model.clone())),
            ExcavatorField::BoomLength => record.boom_length.map(OptionValue::Number),
            ExcavatorField::ArmLength => record.arm_length.map(OptionValue::Number),
            ExcavatorField::Cwt => record.cwt.map(OptionValue::Number),
            ExcavatorField::ShoeWidth => record.shoe_width.map(OptionValue::Number),
            ExcavatorField::Reach => record.reach.map(OptionValue::Number),
        };
        if let Some(value) = value {
            push_unique(&mut values, value);
        }
    }

    Some((field, values))
}

/// Truck fields in the order they are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckField {
    Brand,
    Type,
    Model,
    Payload,
}

impl TruckField {
    pub fn label(&self) -> &'static str {
        match self {
            TruckField::Brand => "Dump Truck Brand",
            TruckField::Type => "Dump Truck Type",
            TruckField::Model => "Dump Truck Model",
            TruckField::Payload => "Dump Truck Payload (tonnes)",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialTruck {
    pub brand: Option<String>,
    pub truck_type: Option<String>,
    pub model: Option<String>,
}

/// Distinct values for the next truck field.
///
/// Payloads are offered for the chosen model only.
pub fn truck_options(trucks: &[TruckSpec], partial: &PartialTruck) -> (TruckField, Vec<OptionValue>) {
    let field = if partial.brand.is_none() {
        TruckField::Brand
    } else if partial.truck_type.is_none() {
        TruckField::Type
    } else if partial.model.is_none() {
        TruckField::Model
    } else {
        TruckField::Payload
    };

    let mut values = Vec::new();
    let admitted = trucks.iter().filter(|t| {
        partial.brand.as_ref().map_or(true, |b| *b == t.brand)
            && partial.truck_type.as_ref().map_or(true, |ty| *ty == t.truck_type)
            && partial.model.as_ref().map_or(true, |m| *m == t.model)
    });

    for truck in admitted {
        let value = match field {
            TruckField::Brand => Some(OptionValue::Text(truck.brand.clone())),
            TruckField::Type => Some(OptionValue::Text(truck.truck_type.clone())),
            TruckField::Model => Some(OptionValue::Text(truck.model.clone())),
            TruckField::Payload => truck.payload.map(OptionValue::Number),
        };
        if let Some(value) = value {
            push_unique(&mut values, value);
        }
    }

    (field, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(make: &str, model: &str, boom: f64, reach: f64) -> ExcavatorRecord {
        ExcavatorRecord {
            make: make.to_string(),
            model: model.to_string(),
            boom_length: Some(boom),
            arm_length: Some(3.0),
            cwt: Some(8000.0),
            shoe_width: Some(600.0),
            reach: Some(reach),
            class: Some(30.0),
            swl: Some(5000.0),
        }
    }

    fn table() -> Vec<ExcavatorRecord> {
        vec![
            record("CAT", "336", 6.5, 6.0),
            record("CAT", "336", 6.5, 7.0),
            record("CAT", "349", 7.0, 6.0),
            record("Komatsu", "PC360", 6.5, 6.0),
        ]
    }

    #[test]
    fn test_make_options_distinct_in_order() {
        let (field, values) = excavator_options(&table(), &PartialExcavator::default()).unwrap();
        assert_eq!(field, ExcavatorField::Make);
        assert_eq!(
            values,
            vec![
                OptionValue::Text("CAT".to_string()),
                OptionValue::Text("Komatsu".to_string())
            ]
        );
    }

    #[test]
    fn test_cascade_narrows_reach() {
        let partial = PartialExcavator {
            make: Some("CAT".to_string()),
            model: Some("336".to_string()),
            boom_length: Some(6.5),
            arm_length: Some(3.0),
            cwt: Some(8000.0),
            shoe_width: Some(600.0),
            reach: None,
        };
        let (field, values) = excavator_options(&table(), &partial).unwrap();
        assert_eq!(field, ExcavatorField::Reach);
        assert_eq!(values, vec![OptionValue::Number(6.0), OptionValue::Number(7.0)]);
    }

    #[test]
    fn test_complete_selection() {
        let partial = PartialExcavator {
            make: Some("CAT".to_string()),
            model: Some("349".to_string()),
            boom_length: Some(7.0),
            arm_length: Some(3.0),
            cwt: Some(8000.0),
            shoe_width: Some(600.0),
            reach: Some(6.0),
        };
        assert!(excavator_options(&table(), &partial).is_none());
        assert_eq!(partial.complete().unwrap().model, "349");
    }

    #[test]
    fn test_null_cells_not_offered() {
        let mut rows = table();
        rows[0].boom_length = None;
        let partial = PartialExcavator {
            make: Some("CAT".to_string()),
            model: Some("336".to_string()),
            ..Default::default()
        };
        let (_, values) = excavator_options(&rows, &partial).unwrap();
        assert_eq!(values, vec![OptionValue::Number(6.5)]);
    }

    #[test]
    fn test_truck_options() {
        let trucks = vec![
            TruckSpec {
                brand: "CAT".to_string(),
                truck_type: "Rigid".to_string(),
                model: "773G".to_string(),
                payload: Some(55.0),
            },
            TruckSpec {
                brand: "CAT".to_string(),
                truck_type: "Articulated".to_string(),
                model: "745".to_string(),
                payload: Some(41.0),
            },
        ];
        let (field, values) = truck_options(&trucks, &PartialTruck::default());
        assert_eq!(field, TruckField::Brand);
        assert_eq!(values.len(), 1);

        let partial = PartialTruck {
            brand: Some("CAT".to_string()),
            truck_type: Some("Rigid".to_string()),
            model: Some("773G".to_string()),
        };
        let (field, values) = truck_options(&trucks, &partial);
        assert_eq!(field, TruckField::Payload);
        assert_eq!(values, vec![OptionValue::Number(55.0)]);
    }
}
