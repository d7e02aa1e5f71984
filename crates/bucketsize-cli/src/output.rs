//! Output formatting module

use bucketsize_app::app::SizingOutcome;
use bucketsize_app::delivery::DeliveryOutcome;
use bucketsize_domain::service::{generate_comparison_report, OptionValue};
use bucketsize_types::OutputFormat;
use bucketsize_types::Result;

pub fn output_outcome(output_format: OutputFormat, outcome: &SizingOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(outcome)?;
        println!("{}", content);
        return Ok(());
    }

    let report = match outcome {
        SizingOutcome::Recommended(report) => report,
        other => {
            if let Some(message) = other.message() {
                println!("{}", message);
            }
            if let SizingOutcome::NoFeasibleBucket { swl } = other {
                println!("Safe working load at this reach: {:.0}kg", swl);
            }
            return Ok(());
        }
    };

    println!("\n{}", report.recommendation());
    println!("{}", report.headline());
    println!();
    print!(
        "{}",
        generate_comparison_report(&report.comparison, &report.recommended_label)
    );

    println!();
    for line in report.summary_lines() {
        println!("{}", line);
    }

    Ok(())
}

pub fn output_options(output_format: OutputFormat, label: &str, values: &[OptionValue]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "field": label,
            "values": values,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("{}", label);
    println!("{}", "=".repeat(label.chars().count()));
    if values.is_empty() {
        println!("(no matching entries)");
    }
    for value in values {
        println!("  {}", value);
    }

    Ok(())
}

pub fn output_delivery(email: &str, outcome: &DeliveryOutcome) {
    if outcome.sent {
        eprintln!("Report queued for: {}", email);
    }
    if outcome.logged {
        eprintln!("Contact recorded: {}", email);
    }
}
