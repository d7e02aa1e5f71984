//! Shared value types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which bucket catalog to search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogVariant {
    /// General purpose buckets
    #[default]
    Standard,
    /// Heavy-duty buckets
    HeavyDuty,
}

impl CatalogVariant {
    /// Build from the "heavy duty only" toggle of the input form
    pub fn from_heavy_duty_flag(heavy_duty: bool) -> Self {
        if heavy_duty {
            CatalogVariant::HeavyDuty
        } else {
            CatalogVariant::Standard
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            CatalogVariant::Standard => "Standard",
            CatalogVariant::HeavyDuty => "Heavy Duty",
        }
    }
}

impl std::fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
