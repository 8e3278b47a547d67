//! CSV ingestion with column renaming and defensive type coercion.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::info;

use super::{Dataset, Record};

/// Source header spellings mapped onto the canonical column names.
const RENAME_MAP: &[(&str, &str)] = &[
    ("order_date", "date"),
    ("advertiser_id", "advertiser"),
    ("revenue", "spend"),
];

/// Date layouts accepted before a cell degrades to the null sentinel.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Read the spend records into memory, once, at startup.
///
/// A missing or unreadable file is the only fatal condition; malformed cells
/// are coerced (non-numeric to zero, unparseable dates to `None`) rather than
/// rejected.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening data file {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading csv header")?
        .iter()
        .map(normalize_column)
        .collect();
    let position = |name: &str| columns.iter().position(|c| c == name);
    let date_idx = position("date");
    let advertiser_idx = position("advertiser");
    let spend_idx = position("spend");
    let orders_idx = position("orders");
    let customers_idx = position("customers");

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.context("reading csv record")?;
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i));
        rows.push(Record {
            date: cell(date_idx).and_then(parse_date),
            advertiser: cell(advertiser_idx)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            spend: cell(spend_idx).map(coerce_f64).unwrap_or(0.0),
            orders: cell(orders_idx).map(coerce_i64).unwrap_or(0),
            customers: cell(customers_idx).map(coerce_i64).unwrap_or(0),
        });
    }

    info!(
        rows = rows.len(),
        columns = ?columns,
        path = %path.display(),
        "loaded advertiser dataset"
    );
    Ok(Dataset::new(columns, rows))
}

fn normalize_column(raw: &str) -> String {
    let lower = raw.trim().to_ascii_lowercase();
    RENAME_MAP
        .iter()
        .find(|(from, _)| *from == lower)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(lower)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn coerce_f64(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

fn coerce_i64(raw: &str) -> i64 {
    raw.parse()
        .or_else(|_| raw.parse::<f64>().map(|v| v as i64))
        .unwrap_or(0)
}
