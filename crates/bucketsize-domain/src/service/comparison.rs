//! Old vs. recommended bucket comparison tables

use serde::{Deserialize, Serialize};

use super::productivity::{percent_difference, BucketProjection};
use crate::model::ProductivityPolicy;

const NOT_APPLICABLE: &str = "n/a";
const NO_VALUE: &str = "-";

/// One line of a comparison table, every cell pre-formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub description: String,
    pub old: String,
    pub new: String,
    pub difference: String,
    pub percent_difference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSection {
    pub title: String,
    pub rows: Vec<ComparisonRow>,
}

/// Everything the presentation layer shows for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityComparison {
    pub old: BucketProjection,
    pub new: BucketProjection,
    /// Headline gain (%), `None` when the current bucket moves nothing
    pub productivity_gain_percent: Option<f64>,
    pub sections: Vec<ComparisonSection>,
}

impl ProductivityComparison {
    /// Footnotes for trucks whose payload was raised to match whole passes
    pub fn fill_factor_notes(&self, new_label: &str) -> Vec<String> {
        let mut notes = Vec::new();
        for (fill, label) in [(&self.new.truck_fill, new_label), (&self.old.truck_fill, "Old Bucket")] {
            if fill.is_adjusted() {
                if let Some(factor) = fill.fill_factor_percent() {
                    notes.push(format!(
                        "*Dump Truck fill factor of {:.1}% applied for {} pass matching.",
                        factor, label
                    ));
                }
            }
        }
        notes
    }

    /// Look up a row by section title and description
    pub fn row(&self, section: &str, description: &str) -> Option<&ComparisonRow> {
        self.sections
            .iter()
            .find(|s| s.title == section)?
            .rows
            .iter()
            .find(|r| r.description == description)
    }
}

fn fmt_value(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

fn fmt_optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| fmt_value(v, decimals))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn fmt_percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.0}%", v))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Row with difference and percentage difference
fn metric_row(description: impl Into<String>, old: f64, new: f64, decimals: usize) -> ComparisonRow {
    optional_metric_row(description, Some(old), Some(new), decimals)
}

fn optional_metric_row(
    description: impl Into<String>,
    old: Option<f64>,
    new: Option<f64>,
    decimals: usize,
) -> ComparisonRow {
    let (difference, percent) = match (old, new) {
        (Some(o), Some(n)) => (fmt_value(n - o, decimals), fmt_percent(percent_difference(o, n))),
        _ => (NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string()),
    };
    ComparisonRow {
        description: description.into(),
        old: fmt_optional(old, decimals),
        new: fmt_optional(new, decimals),
        difference,
        percent_difference: percent,
    }
}

/// Row whose difference isn't meaningful
fn plain_row(description: impl Into<String>, old: f64, new: f64, decimals: usize) -> ComparisonRow {
    ComparisonRow {
        description: description.into(),
        old: fmt_value(old, decimals),
        new: fmt_value(new, decimals),
        difference: NO_VALUE.to_string(),
        percent_difference: NO_VALUE.to_string(),
    }
}

fn payload_cell(projection: &BucketProjection) -> String {
    let marker = if projection.truck_fill.is_adjusted() { "*" } else { "" };
    format!("{:.0}{}", projection.truck_fill.effective_payload, marker)
}

/// Build the four comparison sections
pub fn build_comparison(
    old: BucketProjection,
    new: BucketProjection,
    material_density: f64,
    truck_label: &str,
    policy: &ProductivityPolicy,
) -> ProductivityComparison {
    let side_by_side = ComparisonSection {
        title: "Side-by-Side Bucket Comparison".to_string(),
        rows: vec![
            metric_row("Capacity (m³)", old.capacity, new.capacity, 1),
            plain_row("Material Density (kg/m³)", material_density, material_density, 0),
            metric_row("Bucket Payload (kg)", old.payload, new.payload, 0),
            metric_row(
                "Total Suspended Load (kg)",
                old.total_suspended_load,
                new.total_suspended_load,
                0,
            ),
        ],
    };

    let mut truck_row = metric_row(
        format!("{} Payload (kg)", truck_label),
        old.truck_fill.effective_payload,
        new.truck_fill.effective_payload,
        0,
    );
    truck_row.old = payload_cell(&old);
    truck_row.new = payload_cell(&new);

    let loadout = ComparisonSection {
        title: "Loadout Productivity & Truck Pass Simulation".to_string(),
        rows: vec![
            truck_row,
            optional_metric_row(
                "Avg No. Swings to Fill Truck",
                old.truck_fill.swings_to_fill,
                new.truck_fill.swings_to_fill,
                1,
            ),
            optional_metric_row("Time to Fill Truck (min)", old.time_to_fill, new.time_to_fill, 1),
            metric_row(
                format!("Avg Trucks/Hour @ {:.0}% eff", policy.efficiency_factor * 100.0),
                old.trucks_per_hour,
                new.trucks_per_hour,
                1,
            ),
            plain_row("Swings/Hour", old.swings_per_hour, new.swings_per_hour, 0),
            metric_row(
                "Tonnes/Hour",
                old.truck_tonnage_per_hour,
                new.truck_tonnage_per_hour,
                0,
            ),
        ],
    };

    let reference = ComparisonSection {
        title: format!("{:.0}-Swings Simulation", policy.reference_daily_swings),
        rows: daily_rows(&old, &new, None),
    };

    let improved = ComparisonSection {
        title: format!(
            "{:.0}%-Improved-Cycle-Time Simulation",
            policy.cycle_improvement_percent()
        ),
        rows: daily_rows(&old, &new, Some(policy.cycle_improvement_factor)),
    };

    let productivity_gain_percent = super::productivity::productivity_gain_percent(&old, &new, policy);

    ProductivityComparison {
        old,
        new,
        productivity_gain_percent,
        sections: vec![side_by_side, loadout, reference, improved],
    }
}

/// Daily rows for the reference run, or for the improved-cycle run when
/// `improvement` carries the cycle factor
fn daily_rows(
    old: &BucketProjection,
    new: &BucketProjection,
    improvement: Option<f64>,
) -> Vec<ComparisonRow> {
    let o = old.daily;
    let (n, swings_row) = match improvement {
        Some(factor) => {
            let n = new.daily.scaled(factor);
            (n, metric_row("Number of Swings", o.swings, n.swings, 0))
        }
        None => {
            let n = new.daily;
            (n, plain_row("Number of Swings", o.swings, n.swings, 0))
        }
    };

    vec![
        swings_row,
        metric_row("Total Volume (m³)", o.volume_m3, n.volume_m3, 0),
        metric_row("Total Tonnes", o.tonnes, n.tonnes, 0),
        metric_row("Total Trucks", o.trucks, n.trucks, 0),
    ]
}

/// Render the comparison as a fixed-width text report
pub fn generate_comparison_report(comparison: &ProductivityComparison, new_label: &str) -> String {
    let mut report = String::new();
    report.push_str("==========================================================================\n");
    report.push_str("                     Bucket Productivity Comparison                       \n");
    report.push_str("==========================================================================\n");

    for section in &comparison.sections {
        report.push('\n');
        report.push_str(&format!("【{}】\n", section.title));
        report.push_str("-".repeat(74).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<32} {:>9} {:>9} {:>10} {:>10}\n",
            "Description", "Old", "New", "Diff", "% Diff"
        ));
        report.push_str("-".repeat(74).as_str());
        report.push('\n');
        for row in &section.rows {
            report.push_str(&format!(
                "{:<32} {:>9} {:>9} {:>10} {:>10}\n",
                truncate_str(&row.description, 32),
                row.old,
                row.new,
                row.difference,
                row.percent_difference
            ));
        }
    }

    let notes = comparison.fill_factor_notes(new_label);
    if !notes.is_empty() {
        report.push('\n');
        for note in notes {
            report.push_str(&note);
            report.push('\n');
        }
    }

    report.push_str("==========================================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
