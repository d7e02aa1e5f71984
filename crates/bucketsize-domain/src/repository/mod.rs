//! Repository trait definitions for reference data

use crate::model::EquipmentCatalog;
use bucketsize_types::Error;

/// Source of the equipment catalog (excavators, buckets, trucks)
pub trait CatalogRepository {
    /// Load every reference table
    fn load_catalog(&self) -> Result<EquipmentCatalog, Error>;
}
