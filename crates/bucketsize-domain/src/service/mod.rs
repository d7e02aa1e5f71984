//! Domain services

pub mod bucket_optimizer;
pub mod comparison;
pub mod productivity;
pub mod selection;
pub mod swl_resolver;
pub mod truck_fill;

pub use bucket_optimizer::{select_optimal_bucket, LoadContext};
pub use comparison::{
    build_comparison, generate_comparison_report, ComparisonRow, ComparisonSection,
    ProductivityComparison,
};
pub use productivity::{project_bucket, BucketProjection, OperatingConditions};
pub use selection::{
    excavator_options, truck_options, ExcavatorField, OptionValue, PartialExcavator, PartialTruck,
    TruckField,
};
pub use swl_resolver::{excavator_class, resolve_swl};
pub use truck_fill::{reconcile_truck_fill, TruckFill};
