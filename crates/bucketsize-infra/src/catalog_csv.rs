//! CSV loaders for the equipment catalog
//!
//! Column names are the contract; column order is free. Numeric cells that
//! don't parse become `None` instead of failing the load, so one bad row
//! never takes the whole catalog down.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use log::{debug, warn};

use bucketsize_domain::model::{BucketOption, ExcavatorRecord, TruckSpec};
use bucketsize_types::{CatalogError, Error, Result};

/// Load the excavator SWL table
///
/// Expected header:
/// make,model,boom_length,arm_length,CWT,shoe_width,reach,class,swl
pub fn load_excavators_from_csv(path: &Path) -> Result<Vec<ExcavatorRecord>> {
    parse_excavators(&read_catalog_text(path)?, &table_name(path))
}

/// Load a bucket catalog
///
/// Expected header:
/// bucket_name,bucket_size,bucket_weight,class
pub fn load_buckets_from_csv(path: &Path) -> Result<Vec<BucketOption>> {
    parse_buckets(&read_catalog_text(path)?, &table_name(path))
}

/// Load the dump truck table
///
/// Expected header:
/// brand,type,model,payload
pub fn load_trucks_from_csv(path: &Path) -> Result<Vec<TruckSpec>> {
    parse_trucks(&read_catalog_text(path)?, &table_name(path))
}

fn table_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("catalog")
        .to_string()
}

/// Read a catalog file and decode it to UTF-8.
///
/// Honours a byte order mark. Files saved by spreadsheet tools without one
/// are tried as UTF-8 first, then Windows-1252.
pub fn read_catalog_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    if bytes.is_empty() {
        return Err(CatalogError::Empty(path.display().to_string()).into());
    }

    let encoding = Encoding::for_bom(&bytes).map(|(enc, _)| enc).unwrap_or(UTF_8);
    let (decoded, _, had_errors) = encoding.decode(&bytes);
    if !had_errors {
        return Ok(decoded.into_owned());
    }

    warn!(
        "{} is not valid {}, decoding as Windows-1252",
        path.display(),
        encoding.name()
    );
    let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
    Ok(decoded.into_owned())
}

/// Parse a numeric cell, `None` when missing or unparseable.
///
/// Commas are only accepted as thousands separators ("9,300"); a decimal
/// comma such as "7,5" is rejected.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    let cleaned = if cell.contains(',') {
        if !is_thousands_grouped(cell) {
            return None;
        }
        cell.replace(',', "")
    } else {
        cell.to_string()
    };
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// "1,234,567.5" style grouping: 1-3 leading digits, then groups of exactly 3
fn is_thousands_grouped(cell: &str) -> bool {
    let unsigned = cell.strip_prefix(['-', '+']).unwrap_or(cell);
    let integer = unsigned.split('.').next().unwrap_or_default();
    if integer.len() != unsigned.len() && unsigned[integer.len() + 1..].contains(',') {
        return false;
    }

    let mut groups = integer.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    leading_ok && groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Resolved column positions for one table
struct Columns<'a> {
    table: &'a str,
    headers: csv::StringRecord,
}

impl<'a> Columns<'a> {
    fn new(reader: &mut csv::Reader<&[u8]>, table: &'a str) -> Result<Self> {
        let headers = reader.headers()?.clone();
        Ok(Self { table, headers })
    }

    fn require(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(column))
            .ok_or_else(|| {
                CatalogError::MissingColumn {
                    table: self.table.to_string(),
                    column: column.to_string(),
                }
                .into()
            })
    }
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes())
}

fn text_cell(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").to_string()
}

fn numeric_cell(record: &csv::StringRecord, idx: usize, row: usize, column: &str) -> Option<f64> {
    let raw = record.get(idx).unwrap_or("");
    let value = parse_numeric(raw);
    if value.is_none() && !raw.trim().is_empty() {
        debug!("Row {}: '{}' in column {} is not numeric", row, raw, column);
    }
    value
}

pub fn parse_excavators(text: &str, table: &str) -> Result<Vec<ExcavatorRecord>> {
    let mut reader = reader(text);
    let columns = Columns::new(&mut reader, table)?;
    let make = columns.require("make")?;
    let model = columns.require("model")?;
    let boom_length = columns.require("boom_length")?;
    let arm_length = columns.require("arm_length")?;
    let cwt = columns.require("CWT")?;
    let shoe_width = columns.require("shoe_width")?;
    let reach = columns.require("reach")?;
    let class = columns.require("class")?;
    let swl = columns.require("swl")?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2;
        records.push(ExcavatorRecord {
            make: text_cell(&record, make),
            model: text_cell(&record, model),
            boom_length: numeric_cell(&record, boom_length, row, "boom_length"),
            arm_length: numeric_cell(&record, arm_length, row, "arm_length"),
            cwt: numeric_cell(&record, cwt, row, "CWT"),
            shoe_width: numeric_cell(&record, shoe_width, row, "shoe_width"),
            reach: numeric_cell(&record, reach, row, "reach"),
            class: numeric_cell(&record, class, row, "class"),
            swl: numeric_cell(&record, swl, row, "swl"),
        });
    }

    debug!("Loaded {} excavator rows from {}", records.len(), table);
    Ok(records)
}

pub fn parse_buckets(text: &str, table: &str) -> Result<Vec<BucketOption>> {
    let mut reader = reader(text);
    let columns = Columns::new(&mut reader, table)?;
    let name = columns.require("bucket_name")?;
    let size = columns.require("bucket_size")?;
    let weight = columns.require("bucket_weight")?;
    let class = columns.require("class")?;

    let mut buckets = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2;
        buckets.push(BucketOption {
            bucket_name: text_cell(&record, name),
            bucket_size: numeric_cell(&record, size, row, "bucket_size"),
            bucket_weight: numeric_cell(&record, weight, row, "bucket_weight"),
            class: numeric_cell(&record, class, row, "class"),
        });
    }

    debug!("Loaded {} bucket rows from {}", buckets.len(), table);
    Ok(buckets)
}

pub fn parse_trucks(text: &str, table: &str) -> Result<Vec<TruckSpec>> {
    let mut reader = reader(text);
    let columns = Columns::new(&mut reader, table)?;
    let brand = columns.require("brand")?;
    let truck_type = columns.require("type")?;
    let model = columns.require("model")?;
    let payload = columns.require("payload")?;

    let mut trucks = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 2;
        trucks.push(TruckSpec {
            brand: text_cell(&record, brand),
            truck_type: text_cell(&record, truck_type),
            model: text_cell(&record, model),
            payload: numeric_cell(&record, payload, row, "payload"),
        });
    }

    debug!("Loaded {} truck rows from {}", trucks.len(), table);
    Ok(trucks)
}
