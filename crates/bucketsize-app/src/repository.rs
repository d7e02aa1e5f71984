//! Repository adapters for the persistence layer

use bucketsize_domain::model::EquipmentCatalog;
use bucketsize_domain::repository::CatalogRepository;
use bucketsize_infra::persistence::FileCatalogRepository;
use bucketsize_types::Result;

use crate::config::Config;

/// Open the file-based catalog repository from the configured directory
pub fn open_catalog_repo(config: &Config) -> Result<FileCatalogRepository> {
    FileCatalogRepository::new(config.data_dir()?)
}

/// Load the whole catalog from the configured directory
pub fn load_catalog(config: &Config) -> Result<EquipmentCatalog> {
    open_catalog_repo(config)?.load_catalog()
}
