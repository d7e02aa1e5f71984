//! Application Layer
//!
//! This module provides the application layer that orchestrates between
//! the CLI and the domain/infrastructure layers.
//!
//! The app layer contains:
//! - `sizing_service`: Core use case for recommending a bucket

pub mod sizing_service;

// Re-export main types for convenience
pub use sizing_service::{SizingOutcome, SizingReport, SizingService, SizingServiceError};
