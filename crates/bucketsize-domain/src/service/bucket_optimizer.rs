//! Optimal bucket selection
//!
//! Picks the largest bucket whose fully loaded weight stays within the
//! excavator's safe working load.

use log::debug;

use crate::model::{BucketOption, OptimalBucket, ProductivityPolicy};

/// Loaded inputs the optimizer needs from the request
#[derive(Debug, Clone, Copy)]
pub struct LoadContext {
    /// Material density (kg/m³)
    pub material_density: f64,
    /// Quick hitch weight (kg)
    pub quick_hitch_weight: f64,
}

/// Material mass carried per swing (kg)
pub fn bucket_payload(bucket_size: f64, material_density: f64) -> f64 {
    bucket_size * material_density
}

/// Quick hitch + material + empty bucket (kg)
pub fn total_suspended_load(bucket_size: f64, bucket_weight: f64, load: &LoadContext) -> f64 {
    load.quick_hitch_weight + bucket_payload(bucket_size, load.material_density) + bucket_weight
}

/// Scan the catalog for the largest feasible bucket.
///
/// Rows above `excavator_class + class_ceiling_offset` are skipped; lower
/// classes are always eligible. When `excavator_class` is `None` no class
/// ceiling is applied. Rows with a null numeric cell are skipped. Only a
/// strictly larger size replaces the current pick, so the first of equally
/// sized buckets wins.
pub fn select_optimal_bucket(
    buckets: &[BucketOption],
    swl: f64,
    excavator_class: Option<f64>,
    load: &LoadContext,
    policy: &ProductivityPolicy,
) -> Option<OptimalBucket> {
    let ceiling = excavator_class.map(|class| class + policy.class_ceiling_offset);
    let mut best: Option<OptimalBucket> = None;
    let mut highest_size = 0.0;

    for bucket in buckets {
        let (Some(size), Some(weight), Some(class)) =
            (bucket.bucket_size, bucket.bucket_weight, bucket.class)
        else {
            debug!("Skipping bucket '{}' with incomplete data", bucket.bucket_name);
            continue;
        };

        if ceiling.is_some_and(|max_class| class > max_class) {
            continue;
        }

        let total_weight = total_suspended_load(size, weight, load);
        if total_weight <= swl && size > highest_size {
            highest_size = size;
            best = Some(OptimalBucket {
                bucket_name: bucket.bucket_name.clone(),
                bucket_size: size,
                bucket_weight: weight,
                total_weight,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str, size: f64, weight: f64, class: f64) -> BucketOption {
        BucketOption {
            bucket_name: name.to_string(),
            bucket_size: Some(size),
            bucket_weight: Some(weight),
            class: Some(class),
        }
    }

    fn load(density: f64, hitch: f64) -> LoadContext {
        LoadContext {
            material_density: density,
            quick_hitch_weight: hitch,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let buckets = vec![
            bucket("B1", 2.0, 800.0, 15.0),
            bucket("B2", 2.5, 900.0, 25.0),
            bucket("B3", 1.8, 700.0, 18.0),
        ];
        let policy = ProductivityPolicy::default();
        let best =
            select_optimal_bucket(&buckets, 5000.0, Some(20.0), &load(1500.0, 0.0), &policy)
                .unwrap();
        assert_eq!(best.bucket_name, "B2");
        assert!((best.total_weight - 4650.0).abs() < 1e-9);
    }

    #[test]
    fn test_class_ceiling_excludes_heavy_class() {
        let buckets = vec![
            bucket("Small", 1.0, 500.0, 10.0),
            bucket("TooHeavyClass", 2.0, 600.0, 31.0),
        ];
        let policy = ProductivityPolicy::default();
        let best =
            select_optimal_bucket(&buckets, 10_000.0, Some(20.0), &load(1500.0, 0.0), &policy)
                .unwrap();
        assert_eq!(best.bucket_name, "Small");
    }

    #[test]
    fn test_class_at_ceiling_is_eligible() {
        let buckets = vec![bucket("Edge", 2.0, 600.0, 30.0)];
        let policy = ProductivityPolicy::default();
        let best = select_optimal_bucket(&buckets, 10_000.0, Some(20.0), &load(1500.0, 0.0), &policy);
        assert_eq!(best.unwrap().bucket_name, "Edge");
    }

    #[test]
    fn test_unknown_class_applies_no_ceiling() {
        let buckets = vec![bucket("Any", 2.0, 600.0, 99.0)];
        let policy = ProductivityPolicy::default();
        let best = select_optimal_bucket(&buckets, 10_000.0, None, &load(1500.0, 0.0), &policy);
        assert!(best.is_some());
    }

    #[test]
    fn test_quick_hitch_counts_against_swl() {
        let buckets = vec![
            bucket("A", 2.0, 800.0, 10.0),
            bucket("B", 1.5, 700.0, 10.0),
        ];
        let policy = ProductivityPolicy::default();
        // A: 300 + 3000 + 800 = 4100 > 4000, B: 300 + 2250 + 700 = 3250
        let best = select_optimal_bucket(&buckets, 4000.0, Some(10.0), &load(1500.0, 300.0), &policy)
            .unwrap();
        assert_eq!(best.bucket_name, "B");
        assert!((best.total_weight - 3250.0).abs() < 1e-9);
    }

    #[test]
    fn test_none_found() {
        let buckets = vec![bucket("A", 2.0, 800.0, 10.0)];
        let policy = ProductivityPolicy::default();
        assert!(select_optimal_bucket(&buckets, 1000.0, Some(10.0), &load(1500.0, 0.0), &policy)
            .is_none());
    }

    #[test]
    fn test_tie_first_seen_wins() {
        let buckets = vec![
            bucket("First", 2.0, 800.0, 10.0),
            bucket("Second", 2.0, 700.0, 10.0),
        ];
        let policy = ProductivityPolicy::default();
        let best =
            select_optimal_bucket(&buckets, 10_000.0, Some(10.0), &load(1000.0, 0.0), &policy)
                .unwrap();
        assert_eq!(best.bucket_name, "First");
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let buckets = vec![
            BucketOption {
                bucket_name: "Broken".to_string(),
                bucket_size: Some(5.0),
                bucket_weight: None,
                class: Some(10.0),
            },
            bucket("Ok", 1.0, 400.0, 10.0),
        ];
        let policy = ProductivityPolicy::default();
        let best =
            select_optimal_bucket(&buckets, 10_000.0, Some(10.0), &load(1000.0, 0.0), &policy)
                .unwrap();
        assert_eq!(best.bucket_name, "Ok");
    }

    #[test]
    fn test_result_is_maximal_and_within_limits() {
        let buckets: Vec<BucketOption> = (1..=30)
            .map(|i| {
                let size = i as f64 * 0.2;
                bucket(&format!("B{}", i), size, 400.0 + 150.0 * size, (i % 7) as f64 * 6.0)
            })
            .collect();
        let policy = ProductivityPolicy::default();
        let ctx = load(1700.0, 250.0);
        let swl = 9000.0;
        let class = 18.0;
        let best = select_optimal_bucket(&buckets, swl, Some(class), &ctx, &policy).unwrap();

        assert!(best.total_weight <= swl);
        for b in &buckets {
            let (size, weight, c) = (b.bucket_size.unwrap(), b.bucket_weight.unwrap(), b.class.unwrap());
            let feasible = c <= class + 10.0 && total_suspended_load(size, weight, &ctx) <= swl;
            if feasible {
                assert!(best.bucket_size >= size);
            }
            if b.bucket_name == best.bucket_name {
                assert!(c <= class + 10.0);
            }
        }
    }
}
