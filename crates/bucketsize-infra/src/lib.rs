//! Infrastructure layer - catalog loaders and file repositories

pub mod catalog_csv;
pub mod persistence;
