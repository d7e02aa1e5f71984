//! Bucket sizing domain
//!
//! Reference data model, the sizing services (SWL lookup, bucket
//! selection, truck-fill reconciliation, productivity projection) and the
//! catalog repository trait.

pub mod model;
pub mod repository;
pub mod service;
