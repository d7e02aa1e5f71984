//! Safe working load lookup

use log::debug;

use crate::model::{ExcavatorRecord, ExcavatorSelector};

/// Find the SWL for an exact excavator configuration.
///
/// Returns the SWL of the first row matching all seven identifying fields.
/// Duplicate configurations resolve to the first row in catalog order.
pub fn resolve_swl(excavators: &[ExcavatorRecord], selector: &ExcavatorSelector) -> Option<f64> {
    let mut matches = excavators
        .iter()
        .filter(|record| record.matches(selector) && record.swl.is_some());

    let first = matches.next()?;
    let duplicates = matches.count();
    if duplicates > 0 {
        debug!(
            "{} {} at {}m reach has {} duplicate SWL rows, using the first",
            selector.make, selector.model, selector.reach, duplicates
        );
    }
    first.swl
}

/// Class tier of a model, from the first row where it parsed
pub fn excavator_class(excavators: &[ExcavatorRecord], model: &str) -> Option<f64> {
    excavators
        .iter()
        .filter(|record| record.model == model)
        .find_map(|record| record.class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, reach: f64, class: Option<f64>, swl: Option<f64>) -> ExcavatorRecord {
        ExcavatorRecord {
            make: "Hitachi".to_string(),
            model: model.to_string(),
            boom_length: Some(6.4),
            arm_length: Some(2.9),
            cwt: Some(8000.0),
            shoe_width: Some(600.0),
            reach: Some(reach),
            class,
            swl,
        }
    }

    fn selector(model: &str, reach: f64) -> ExcavatorSelector {
        ExcavatorSelector {
            make: "Hitachi".to_string(),
            model: model.to_string(),
            boom_length: 6.4,
            arm_length: 2.9,
            cwt: 8000.0,
            shoe_width: 600.0,
            reach,
        }
    }

    #[test]
    fn test_resolve_exact_match() {
        let table = vec![
            record("ZX350", 6.0, Some(35.0), Some(6100.0)),
            record("ZX350", 7.0, Some(35.0), Some(5200.0)),
        ];
        assert_eq!(resolve_swl(&table, &selector("ZX350", 7.0)), Some(5200.0));
    }

    #[test]
    fn test_resolve_no_match() {
        let table = vec![record("ZX350", 6.0, Some(35.0), Some(6100.0))];
        assert_eq!(resolve_swl(&table, &selector("ZX350", 6.5)), None);
        assert_eq!(resolve_swl(&table, &selector("ZX490", 6.0)), None);
    }

    #[test]
    fn test_resolve_duplicate_first_wins() {
        let table = vec![
            record("ZX350", 6.0, Some(35.0), Some(6100.0)),
            record("ZX350", 6.0, Some(35.0), Some(9999.0)),
        ];
        assert_eq!(resolve_swl(&table, &selector("ZX350", 6.0)), Some(6100.0));
    }

    #[test]
    fn test_resolve_skips_null_swl() {
        let table = vec![
            record("ZX350", 6.0, Some(35.0), None),
            record("ZX350", 6.0, Some(35.0), Some(6000.0)),
        ];
        assert_eq!(resolve_swl(&table, &selector("ZX350", 6.0)), Some(6000.0));
    }

    #[test]
    fn test_resolve_empty_table() {
        assert_eq!(resolve_swl(&[], &selector("ZX350", 6.0)), None);
    }

    #[test]
    fn test_excavator_class_first_parsed_row() {
        let table = vec![
            record("ZX350", 6.0, None, Some(6100.0)),
            record("ZX350", 7.0, Some(35.0), Some(5200.0)),
            record("ZX350", 8.0, Some(40.0), Some(4300.0)),
        ];
        assert_eq!(excavator_class(&table, "ZX350"), Some(35.0));
        assert_eq!(excavator_class(&table, "ZX490"), None);
    }
}
