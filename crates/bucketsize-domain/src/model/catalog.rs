//! Equipment reference catalog

use bucketsize_types::CatalogVariant;
use serde::{Deserialize, Serialize};

use super::{BucketOption, ExcavatorRecord, TruckSpec};

/// All reference tables, loaded once and only read afterwards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub excavators: Vec<ExcavatorRecord>,
    pub standard_buckets: Vec<BucketOption>,
    pub heavy_duty_buckets: Vec<BucketOption>,
    pub trucks: Vec<TruckSpec>,
}

impl EquipmentCatalog {
    /// Bucket table for the requested variant
    pub fn buckets(&self, variant: CatalogVariant) -> &[BucketOption] {
        match variant {
            CatalogVariant::Standard => &self.standard_buckets,
            CatalogVariant::HeavyDuty => &self.heavy_duty_buckets,
        }
    }

    /// First truck matching brand and model
    pub fn find_truck(&self, brand: &str, model: &str) -> Option<&TruckSpec> {
        self.trucks
            .iter()
            .find(|t| t.brand == brand && t.model == model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(name: &str) -> BucketOption {
        BucketOption {
            bucket_name: name.to_string(),
            bucket_size: Some(1.0),
            bucket_weight: Some(500.0),
            class: Some(10.0),
        }
    }

    #[test]
    fn test_buckets_by_variant() {
        let catalog = EquipmentCatalog {
            standard_buckets: vec![bucket("GP")],
            heavy_duty_buckets: vec![bucket("HD1"), bucket("HD2")],
            ..Default::default()
        };
        assert_eq!(catalog.buckets(CatalogVariant::Standard).len(), 1);
        assert_eq!(catalog.buckets(CatalogVariant::HeavyDuty)[1].bucket_name, "HD2");
    }

    #[test]
    fn test_find_truck() {
        let catalog = EquipmentCatalog {
            trucks: vec![TruckSpec {
                brand: "Komatsu".to_string(),
                truck_type: "Rigid".to_string(),
                model: "HD465".to_string(),
                payload: Some(55.0),
            }],
            ..Default::default()
        };
        assert!(catalog.find_truck("Komatsu", "HD465").is_some());
        assert!(catalog.find_truck("Komatsu", "HD785").is_none());
    }
}
