//! File-based implementation of CatalogRepository

use std::path::{Path, PathBuf};

use log::{info, warn};

use bucketsize_domain::model::EquipmentCatalog;
use bucketsize_domain::repository::CatalogRepository;
use bucketsize_types::{Error, Result};

use crate::catalog_csv::{load_buckets_from_csv, load_excavators_from_csv, load_trucks_from_csv};

pub const EXCAVATOR_FILE: &str = "excavator_swl.csv";
pub const STANDARD_BUCKET_FILE: &str = "bucket_data.csv";
pub const HEAVY_DUTY_BUCKET_FILE: &str = "bhc_bucket_data.csv";
pub const TRUCK_FILE: &str = "dump_trucks.csv";

/// Catalog stored as four CSV files in one directory
pub struct FileCatalogRepository {
    data_dir: PathBuf,
}

impl FileCatalogRepository {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(Error::FileNotFound(format!(
                "Catalog directory not found: {}",
                data_dir.display()
            )));
        }
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn load_catalog(&self) -> std::result::Result<EquipmentCatalog, Error> {
        let excavators = load_excavators_from_csv(&self.path(EXCAVATOR_FILE))?;
        let standard_buckets = load_buckets_from_csv(&self.path(STANDARD_BUCKET_FILE))?;
        let trucks = load_trucks_from_csv(&self.path(TRUCK_FILE))?;

        let heavy_duty_path = self.path(HEAVY_DUTY_BUCKET_FILE);
        let heavy_duty_buckets = if heavy_duty_path.exists() {
            load_buckets_from_csv(&heavy_duty_path)?
        } else {
            warn!(
                "{} not found, heavy-duty catalog is empty",
                heavy_duty_path.display()
            );
            Vec::new()
        };

        info!(
            "Catalog loaded from {}: {} excavator rows, {} standard buckets, {} heavy-duty buckets, {} trucks",
            self.data_dir.display(),
            excavators.len(),
            standard_buckets.len(),
            heavy_duty_buckets.len(),
            trucks.len()
        );

        Ok(EquipmentCatalog {
            excavators,
            standard_buckets,
            heavy_duty_buckets,
            trucks,
        })
    }
}
