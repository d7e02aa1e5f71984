//! Command handlers

use crate::cli::{Cli, Commands, ExcavatorArgs};
use crate::output::{output_delivery, output_options, output_outcome};
use bucketsize_app::app::{SizingOutcome, SizingReport, SizingService};
use bucketsize_app::config::Config;
use bucketsize_app::delivery::{deliver_report, CsvContactLog, OutboxMailer};
use bucketsize_app::export::{export_to_excel, write_comparison_csv};
use bucketsize_app::repository::load_catalog;
use bucketsize_domain::model::{EquipmentCatalog, ExcavatorSelector, SizingRequest};
use bucketsize_domain::service::{
    excavator_options, resolve_swl, truck_options, OptionValue, PartialExcavator, PartialTruck,
};
use bucketsize_types::{CatalogVariant, Error, OutputFormat, Result};
use log::warn;
use std::fs::File;
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Recommend {
            excavator,
            density,
            quick_hitch,
            bucket_size,
            bucket_weight,
            truck_brand,
            truck_model,
            truck_payload,
            swing_rate,
            heavy_duty,
            export,
            csv,
            email,
        } => {
            let catalog = load_catalog(&config)?;
            let (truck_payload_tonnes, truck_label) =
                resolve_truck(&catalog, truck_brand, truck_model, truck_payload)?;

            let request = SizingRequest {
                excavator: selector(excavator),
                material_density: density,
                quick_hitch_weight: quick_hitch,
                current_bucket_size: bucket_size,
                current_bucket_weight: bucket_weight,
                truck_payload_tonnes,
                truck_label,
                swings_per_minute: swing_rate,
                catalog: CatalogVariant::from_heavy_duty_flag(heavy_duty),
            };

            cmd_recommend(
                &config,
                &catalog,
                &request,
                output_format,
                RecommendOutputs { export, csv, email },
            )
        }

        Commands::Options {
            make,
            model,
            boom,
            arm,
            cwt,
            shoe,
            reach,
        } => {
            let partial = PartialExcavator {
                make,
                model,
                boom_length: boom,
                arm_length: arm,
                cwt,
                shoe_width: shoe,
                reach,
            };
            cmd_options(&config, &partial, output_format)
        }

        Commands::Trucks {
            brand,
            truck_type,
            model,
        } => {
            let partial = PartialTruck {
                brand,
                truck_type,
                model,
            };
            cmd_trucks(&config, &partial, output_format)
        }

        Commands::Config {
            show,
            set_data_dir,
            set_output,
            set_label,
            reset,
        } => cmd_config(show, set_data_dir, set_output, set_label, reset),
    }
}

fn selector(args: ExcavatorArgs) -> ExcavatorSelector {
    ExcavatorSelector {
        make: args.make,
        model: args.model,
        boom_length: args.boom,
        arm_length: args.arm,
        cwt: args.cwt,
        shoe_width: args.shoe,
        reach: args.reach,
    }
}

/// Payload (t) and label for the report, from flags or the truck catalog
fn resolve_truck(
    catalog: &EquipmentCatalog,
    brand: Option<String>,
    model: Option<String>,
    payload: Option<f64>,
) -> Result<(f64, Option<String>)> {
    let label = match (&brand, &model) {
        (Some(b), Some(m)) => Some(format!("{} {}", b, m)),
        _ => None,
    };

    if let Some(payload) = payload {
        return Ok((payload, label));
    }

    let (Some(brand), Some(model)) = (brand, model) else {
        return Err(Error::InvalidInput(
            "Specify --truck-payload, or --truck-brand and --truck-model".to_string(),
        ));
    };

    let truck = catalog.find_truck(&brand, &model).ok_or_else(|| {
        Error::InvalidInput(format!("Dump truck not in catalog: {} {}", brand, model))
    })?;
    let payload = truck.payload.ok_or_else(|| {
        Error::InvalidInput(format!("No payload listed for {}", truck.label()))
    })?;

    Ok((payload, Some(truck.label())))
}

struct RecommendOutputs {
    export: Option<PathBuf>,
    csv: Option<PathBuf>,
    email: Option<String>,
}

fn cmd_recommend(
    config: &Config,
    catalog: &EquipmentCatalog,
    request: &SizingRequest,
    output_format: OutputFormat,
    outputs: RecommendOutputs,
) -> Result<()> {
    let service = SizingService::new(catalog, config.policy.clone())
        .with_recommended_label(config.recommended_label.clone());

    let outcome = service.evaluate(request)?;

    output_outcome(output_format, &outcome)?;

    let SizingOutcome::Recommended(report) = &outcome else {
        return Ok(());
    };

    for warning in write_outputs(config, report, outputs) {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}

/// Export, CSV and email run independently; a failure in one is reported
/// back as a warning and the others still run.
fn write_outputs(config: &Config, report: &SizingReport, outputs: RecommendOutputs) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(path) = outputs.export {
        match export_to_excel(report, &path) {
            Ok(()) => eprintln!("Exported to: {}", path.display()),
            Err(e) => {
                warn!("Excel export to {} failed: {}", path.display(), e);
                warnings.push(format!("Excel export failed: {}", e));
            }
        }
    }

    if let Some(path) = outputs.csv {
        let written = File::create(&path)
            .map_err(Error::from)
            .and_then(|file| write_comparison_csv(report, file));
        match written {
            Ok(()) => eprintln!("CSV written to: {}", path.display()),
            Err(e) => {
                warn!("CSV write to {} failed: {}", path.display(), e);
                warnings.push(format!("CSV export failed: {}", e));
            }
        }
    }

    if let Some(email) = outputs.email {
        let delivered = config.data_dir().and_then(|data_dir| {
            let mailer = OutboxMailer::new(data_dir.join("outbox"));
            let contacts = CsvContactLog::new(data_dir.join("contacts.csv"));
            deliver_report(report, &email, &mailer, &contacts)
        });
        match delivered {
            Ok(delivery) => {
                output_delivery(&email, &delivery);
                warnings.extend(delivery.warnings);
            }
            Err(e) => {
                warn!("Report delivery to {} failed: {}", email, e);
                warnings.push(format!("Email not sent: {}", e));
            }
        }
    }

    warnings
}

fn cmd_options(config: &Config, partial: &PartialExcavator, output_format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(config)?;

    match excavator_options(&catalog.excavators, partial) {
        Some((field, values)) => output_options(output_format, field.label(), &values),
        None => {
            // Configuration complete: show the SWL row it resolves to
            let values: Vec<OptionValue> = partial
                .complete()
                .and_then(|s| resolve_swl(&catalog.excavators, &s))
                .map(OptionValue::Number)
                .into_iter()
                .collect();
            output_options(output_format, "Safe Working Load (kg)", &values)
        }
    }
}

fn cmd_trucks(config: &Config, partial: &PartialTruck, output_format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(config)?;
    let (field, values) = truck_options(&catalog.trucks, partial);
    output_options(output_format, field.label(), &values)
}

fn cmd_config(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_label: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(label) = set_label {
        config.recommended_label = label;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
