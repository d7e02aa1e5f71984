//! Error types for bucketsize

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid policy value for {field}: {value}")]
    InvalidPolicy { field: &'static str, value: f64 },
}

/// Reference catalog errors
///
/// Only structural problems end up here. Unparseable numeric cells are
/// coerced to `None` by the loaders and never raise.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Missing required column '{column}' in {table}")]
    MissingColumn { table: String, column: String },

    #[error("Catalog file is empty: {0}")]
    Empty(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, Error>;
