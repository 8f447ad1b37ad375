//! CWA agricultural weather forecast ETL service.
//!
//! Fetches the F-A0010-001 forecast feed, normalizes its nested
//! per-location / per-element structure into flat (location, date) rows,
//! and persists the result to a spreadsheet report and an embedded
//! SQLite table for the dashboard to consume.

pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod navigate;
pub mod normalize;
pub mod sink;
pub mod table;

use serde_json::Value;

use crate::model::ExtractError;
use crate::sink::SinkReport;
use crate::table::ForecastTable;

/// Normalizes a raw forecast document into the final sorted table.
///
/// Fails before any sink is touched when the document is malformed
/// (`Structure`), has no locations (`EmptyResult`), or yields no dated
/// rows (`NoRecords`).
pub fn build_table(doc: &Value) -> Result<ForecastTable, ExtractError> {
    let records = normalize::extract_records(doc)?;
    Ok(ForecastTable::assemble(records))
}

/// Runs normalization plus the sink fan-out for one raw document.
///
/// The returned report carries each sink's individual outcome; sink
/// failures never propagate as run failures from here.
pub fn process_document(
    doc: &Value,
    spreadsheet_path: &str,
    database_path: &str,
    table_name: &str,
) -> Result<SinkReport, ExtractError> {
    let table = build_table(doc)?;
    logging::info(
        logging::Stage::Extract,
        &format!("Normalized {} forecast rows", table.len()),
    );
    Ok(sink::write_all(&table, spreadsheet_path, database_path, table_name))
}
