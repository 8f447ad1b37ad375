/// Persistence sinks for the assembled forecast table.
///
/// Two independent destinations: a spreadsheet report and an embedded
/// SQLite table. Both are always attempted; each failure is confined to
/// its own sink and collected into the run report rather than aborting
/// anything else.

pub mod spreadsheet;
pub mod sqlite;

use crate::logging::{self, Stage};
use crate::model::SinkError;
use crate::table::ForecastTable;

/// Per-sink outcomes of one persistence fan-out. `Ok` carries the number
/// of data rows written.
#[derive(Debug)]
pub struct SinkReport {
    pub spreadsheet: Result<usize, SinkError>,
    pub database: Result<usize, SinkError>,
}

impl SinkReport {
    /// True when every sink either wrote rows or skipped an empty table.
    /// An empty table is the caller's warning, not a sink failure.
    pub fn all_ok(&self) -> bool {
        let sink_ok = |r: &Result<usize, SinkError>| {
            matches!(r, Ok(_) | Err(SinkError::EmptyTable))
        };
        sink_ok(&self.spreadsheet) && sink_ok(&self.database)
    }
}

/// Writes the table to both sinks, independently.
///
/// Neither write depends on the other: a spreadsheet failure never
/// suppresses the database write and vice versa. Results are logged per
/// sink and returned together.
pub fn write_all(
    table: &ForecastTable,
    spreadsheet_path: &str,
    database_path: &str,
    table_name: &str,
) -> SinkReport {
    let spreadsheet = spreadsheet::write_spreadsheet(table, spreadsheet_path);
    logging::log_sink_result(Stage::Sheet, spreadsheet_path, &spreadsheet);

    let database = sqlite::write_table(table, database_path, table_name);
    logging::log_sink_result(Stage::Db, database_path, &database);

    SinkReport { spreadsheet, database }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_counts_as_ok() {
        let report = SinkReport {
            spreadsheet: Err(SinkError::EmptyTable),
            database: Ok(3),
        };
        assert!(report.all_ok());
    }

    #[test]
    fn test_io_failure_is_not_ok() {
        let report = SinkReport {
            spreadsheet: Ok(3),
            database: Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ))),
        };
        assert!(!report.all_ok());
    }
}
