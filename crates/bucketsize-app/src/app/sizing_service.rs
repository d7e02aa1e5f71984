//! Sizing Service - core use case for bucket recommendation
//!
//! This service runs one evaluation start to finish:
//! 1. Validate the request
//! 2. Resolve the SWL for the excavator configuration
//! 3. Look up the excavator class tier
//! 4. Pick the largest feasible bucket from the selected catalog
//! 5. Project old and new bucket productivity
//! 6. Return a report the caller keeps for display, export and delivery

use bucketsize_domain::model::{EquipmentCatalog, OptimalBucket, ProductivityPolicy, SizingRequest};
use bucketsize_domain::service::{
    build_comparison, excavator_class, project_bucket, resolve_swl, select_optimal_bucket,
    LoadContext, OperatingConditions, ProductivityComparison,
};
use bucketsize_types::{ConfigError, Error};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors specific to the sizing service
#[derive(Debug, Error)]
pub enum SizingServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid policy: {0}")]
    Policy(#[from] ConfigError),

    /// Anything else, passed through unchanged
    #[error(transparent)]
    Other(Error),
}

impl From<Error> for SizingServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => SizingServiceError::InvalidRequest(msg),
            Error::Config(e) => SizingServiceError::Policy(e),
            other => SizingServiceError::Other(other),
        }
    }
}

impl From<SizingServiceError> for Error {
    fn from(err: SizingServiceError) -> Self {
        match err {
            SizingServiceError::InvalidRequest(msg) => Error::InvalidInput(msg),
            SizingServiceError::Policy(e) => Error::Config(e),
            SizingServiceError::Other(e) => e,
        }
    }
}

/// Terminal result of one evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SizingOutcome {
    /// No SWL row for the excavator configuration
    NoMatchingConfiguration,
    /// SWL found but no bucket fits under it
    NoFeasibleBucket { swl: f64 },
    Recommended(Box<SizingReport>),
}

impl SizingOutcome {
    /// User-facing message for outcomes without a recommendation
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SizingOutcome::NoMatchingConfiguration => {
                Some("No matching excavator configuration found!")
            }
            SizingOutcome::NoFeasibleBucket { .. } => {
                Some("No suitable bucket found within SWL limits.")
            }
            SizingOutcome::Recommended(_) => None,
        }
    }

    pub fn report(&self) -> Option<&SizingReport> {
        match self {
            SizingOutcome::Recommended(report) => Some(report),
            _ => None,
        }
    }
}

/// A completed recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingReport {
    pub request: SizingRequest,
    /// Safe working load at the requested reach (kg)
    pub swl: f64,
    pub excavator_class: Option<f64>,
    pub optimal_bucket: OptimalBucket,
    pub comparison: ProductivityComparison,
    /// Column label for the recommended bucket
    pub recommended_label: String,
    pub generated_at: DateTime<Utc>,
}

impl SizingReport {
    /// "Great news" line shown above the tables
    pub fn headline(&self) -> String {
        match self.comparison.productivity_gain_percent {
            Some(gain) => format!(
                "Great news! You could improve your productivity by up to {:.0}%!",
                gain
            ),
            None => "Productivity gain can't be estimated from the current bucket.".to_string(),
        }
    }

    /// "Your bucket solution is the ..." line
    pub fn recommendation(&self) -> String {
        format!(
            "Your bucket solution is the: {} ({} m³)",
            self.optimal_bucket.bucket_name, self.optimal_bucket.bucket_size
        )
    }

    /// Calculation details shown under the tables
    pub fn summary_lines(&self) -> Vec<String> {
        let excavator = &self.request.excavator;
        vec![
            format!(
                "Total Suspended Load ({}): {:.0}kg",
                self.recommended_label, self.optimal_bucket.total_weight
            ),
            format!(
                "Safe Working Load at {}m reach ({} {}): {:.0}kg",
                excavator.reach, excavator.make, excavator.model, self.swl
            ),
            format!(
                "Calculations based on the {}, and with a material density of {:.0}kg/m³.",
                excavator.describe(),
                self.request.material_density
            ),
            format!(
                "Dump Truck: {}, Rated payload = {:.0}kg",
                self.request.truck_label(),
                self.request.truck_payload_kg()
            ),
        ]
    }

    pub fn fill_factor_notes(&self) -> Vec<String> {
        self.comparison.fill_factor_notes(&self.recommended_label)
    }
}

/// Bucket sizing use case over a loaded catalog
pub struct SizingService<'a> {
    catalog: &'a EquipmentCatalog,
    policy: ProductivityPolicy,
    recommended_label: String,
}

impl<'a> SizingService<'a> {
    pub fn new(catalog: &'a EquipmentCatalog, policy: ProductivityPolicy) -> Self {
        Self {
            catalog,
            policy,
            recommended_label: "Recommended Bucket".to_string(),
        }
    }

    pub fn with_recommended_label(mut self, label: impl Into<String>) -> Self {
        self.recommended_label = label.into();
        self
    }

    pub fn policy(&self) -> &ProductivityPolicy {
        &self.policy
    }

    /// Run one evaluation
    pub fn evaluate(&self, request: &SizingRequest) -> Result<SizingOutcome, SizingServiceError> {
        request.validate()?;
        self.policy.validate()?;

        let excavator = &request.excavator;
        let Some(swl) = resolve_swl(&self.catalog.excavators, excavator) else {
            info!(
                "No SWL row for {} {} at {}m reach",
                excavator.make, excavator.model, excavator.reach
            );
            return Ok(SizingOutcome::NoMatchingConfiguration);
        };

        let class = excavator_class(&self.catalog.excavators, &excavator.model);
        if class.is_none() {
            warn!(
                "No class tier for model {}, bucket class ceiling not applied",
                excavator.model
            );
        }

        let load = LoadContext {
            material_density: request.material_density,
            quick_hitch_weight: request.quick_hitch_weight,
        };
        let buckets = self.catalog.buckets(request.catalog);
        debug!(
            "Searching {} {} buckets under SWL {:.0}kg",
            buckets.len(),
            request.catalog,
            swl
        );

        let Some(optimal_bucket) = select_optimal_bucket(buckets, swl, class, &load, &self.policy)
        else {
            info!("No {} bucket fits under SWL {:.0}kg", request.catalog, swl);
            return Ok(SizingOutcome::NoFeasibleBucket { swl });
        };

        let comparison = self.compare(request, &optimal_bucket);
        info!(
            "Recommended {} ({} m³, {:.0}kg suspended) under SWL {:.0}kg",
            optimal_bucket.bucket_name, optimal_bucket.bucket_size, optimal_bucket.total_weight, swl
        );

        Ok(SizingOutcome::Recommended(Box::new(SizingReport {
            request: request.clone(),
            swl,
            excavator_class: class,
            optimal_bucket,
            comparison,
            recommended_label: self.recommended_label.clone(),
            generated_at: Utc::now(),
        })))
    }

    fn compare(&self, request: &SizingRequest, optimal: &OptimalBucket) -> ProductivityComparison {
        let conditions = OperatingConditions {
            material_density: request.material_density,
            swings_per_minute: request.swings_per_minute,
            truck_payload: request.truck_payload_kg(),
        };

        let old_total_load = request.current_bucket_size * request.material_density
            + request.current_bucket_weight
            + request.quick_hitch_weight;

        let old = project_bucket(
            request.current_bucket_size,
            old_total_load,
            &conditions,
            &self.policy,
        );
        let new = project_bucket(
            optimal.bucket_size,
            optimal.total_weight,
            &conditions,
            &self.policy,
        );

        build_comparison(
            old,
            new,
            request.material_density,
            request.truck_label(),
            &self.policy,
        )
    }
}
