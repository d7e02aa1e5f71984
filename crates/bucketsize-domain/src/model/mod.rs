//! Domain model types

pub mod bucket;
pub mod catalog;
pub mod excavator;
pub mod policy;
pub mod request;
pub mod truck;

pub use bucket::{BucketOption, OptimalBucket};
pub use catalog::EquipmentCatalog;
pub use excavator::{ExcavatorRecord, ExcavatorSelector};
pub use policy::ProductivityPolicy;
pub use request::SizingRequest;
pub use truck::TruckSpec;
