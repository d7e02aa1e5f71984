//! CLI definition using clap

use bucketsize_types::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bucketsize")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Excavator bucket sizing against safe working load")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Catalog directory override (excavator_swl.csv, bucket_data.csv, ...)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Excavator configuration, one flag per selector field
#[derive(Args, Debug, Clone)]
pub struct ExcavatorArgs {
    /// Excavator make (e.g., "Volvo")
    #[arg(long)]
    pub make: String,

    /// Excavator model (e.g., "EC300")
    #[arg(long)]
    pub model: String,

    /// Boom length (m)
    #[arg(long)]
    pub boom: f64,

    /// Arm length (m)
    #[arg(long)]
    pub arm: f64,

    /// Counterweight (kg)
    #[arg(long)]
    pub cwt: f64,

    /// Shoe width (mm)
    #[arg(long)]
    pub shoe: f64,

    /// Operating reach (m)
    #[arg(long)]
    pub reach: f64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend the largest bucket within SWL and compare productivity
    Recommend {
        #[command(flatten)]
        excavator: ExcavatorArgs,

        /// Material density (kg/m³)
        #[arg(long, short = 'd')]
        density: f64,

        /// Quick hitch weight (kg), 0 if not fitted
        #[arg(long, default_value = "0")]
        quick_hitch: f64,

        /// Current bucket capacity (m³), 0 if none
        #[arg(long, default_value = "0")]
        bucket_size: f64,

        /// Current bucket weight (kg)
        #[arg(long, default_value = "0")]
        bucket_weight: f64,

        /// Dump truck brand from the catalog (e.g., "CAT")
        #[arg(long)]
        truck_brand: Option<String>,

        /// Dump truck model from the catalog (e.g., "770G")
        #[arg(long)]
        truck_model: Option<String>,

        /// Dump truck payload (t). Overrides the catalog payload.
        #[arg(long)]
        truck_payload: Option<f64>,

        /// Swings per minute
        #[arg(long, short = 's')]
        swing_rate: f64,

        /// Search the heavy-duty bucket catalog
        #[arg(long)]
        heavy_duty: bool,

        /// Export the comparison to an Excel file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Write the comparison as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Email the report to this address via the outbox
        #[arg(long)]
        email: Option<String>,
    },

    /// List the values available for the next excavator field
    Options {
        #[arg(long)]
        make: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        boom: Option<f64>,

        #[arg(long)]
        arm: Option<f64>,

        #[arg(long)]
        cwt: Option<f64>,

        #[arg(long)]
        shoe: Option<f64>,

        #[arg(long)]
        reach: Option<f64>,
    },

    /// List the values available for the next dump truck field
    Trucks {
        #[arg(long)]
        brand: Option<String>,

        #[arg(long = "type")]
        truck_type: Option<String>,

        #[arg(long)]
        model: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set catalog directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the label used for the recommended bucket
        #[arg(long)]
        set_label: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
