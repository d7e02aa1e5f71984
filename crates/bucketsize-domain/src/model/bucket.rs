//! Bucket catalog rows and the optimizer's pick

use serde::{Deserialize, Serialize};

/// One row of a bucket catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketOption {
    pub bucket_name: String,
    /// Heaped capacity (m³)
    pub bucket_size: Option<f64>,
    /// Empty weight (kg)
    pub bucket_weight: Option<f64>,
    /// Compatibility class tier
    pub class: Option<f64>,
}

/// The recommended bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalBucket {
    pub bucket_name: String,
    pub bucket_size: f64,
    pub bucket_weight: f64,
    /// Quick hitch + material payload + empty bucket (kg)
    pub total_weight: f64,
}
