//! Report export: Excel workbook and CSV attachment

use crate::app::SizingReport;
use bucketsize_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::io::Write;
use std::path::Path;

const SHEET_NAME: &str = "Excavator Simulation Data";

fn header_row(report: &SizingReport) -> [&str; 5] {
    [
        "Description",
        "Old Bucket",
        report.recommended_label.as_str(),
        "Difference",
        "% Difference",
    ]
}

/// Export the comparison tables to an Excel file
pub fn export_to_excel(report: &SizingReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_comparison_sheet(sheet, report)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    log::info!("Exported comparison to {}", output_path.display());
    Ok(())
}

fn write_comparison_sheet(sheet: &mut Worksheet, report: &SizingReport) -> Result<()> {
    sheet
        .set_name(SHEET_NAME)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    for (col, header) in header_row(report).iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let mut row: u32 = 1;
    for section in &report.comparison.sections {
        sheet
            .write_string_with_format(row, 0, &section.title, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;

        for line in &section.rows {
            let cells = [
                &line.description,
                &line.old,
                &line.new,
                &line.difference,
                &line.percent_difference,
            ];
            for (col, cell) in cells.iter().enumerate() {
                sheet
                    .write_string(row, col as u16, cell.as_str())
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
            row += 1;
        }
    }

    row += 1;
    for line in report
        .summary_lines()
        .into_iter()
        .chain(report.fill_factor_notes())
    {
        sheet
            .write_string(row, 0, &line)
            .map_err(|e| Error::Excel(e.to_string()))?;
        row += 1;
    }

    sheet
        .set_column_width(0, 40)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Write the comparison tables as CSV, one title line before each section
pub fn write_comparison_csv<W: Write>(report: &SizingReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record(header_row(report))?;

    for section in &report.comparison.sections {
        csv_writer.write_record([section.title.as_str()])?;
        for line in &section.rows {
            csv_writer.write_record([
                &line.description,
                &line.old,
                &line.new,
                &line.difference,
                &line.percent_difference,
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the CSV attachment into memory
pub fn comparison_csv_bytes(report: &SizingReport) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_comparison_csv(report, &mut buf)?;
    Ok(buf)
}
