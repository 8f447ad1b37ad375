/// Spreadsheet sink: one header row plus one row per forecast record,
/// no index column. Absent measurements are serialized as the `N/A`
/// sentinel here and nowhere earlier.

use crate::model::{display_or_missing, SinkError};
use crate::table::ForecastTable;

/// Writes the full table to a spreadsheet file at `path`.
///
/// An empty table returns `SinkError::EmptyTable` before the destination
/// is opened, so a pre-existing report is never clobbered by a zero-row
/// file. Returns the number of data rows written.
pub fn write_spreadsheet(table: &ForecastTable, path: &str) -> Result<usize, SinkError> {
    if table.is_empty() {
        return Err(SinkError::EmptyTable);
    }

    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(ForecastTable::headers())?;

    for record in table.rows() {
        writer.write_record([
            record.location.as_str(),
            record.date.as_str(),
            display_or_missing(&record.condition),
            display_or_missing(&record.min_temp),
            display_or_missing(&record.max_temp),
        ])?;
    }

    writer.flush().map_err(SinkError::Io)?;
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ForecastRecord;

    fn sample_table() -> ForecastTable {
        ForecastTable::assemble(vec![ForecastRecord {
            location: "宜蘭".to_string(),
            date: "2024-01-01".to_string(),
            condition: Some("晴".to_string()),
            min_temp: None,
            max_temp: Some("24".to_string()),
        }])
    }

    #[test]
    fn test_writes_header_and_sentinel() {
        let path = std::env::temp_dir().join("cwawx_sheet_test.csv");
        let path_str = path.to_str().unwrap();

        let written = write_spreadsheet(&sample_table(), path_str).unwrap();
        assert_eq!(written, 1);

        let contents = std::fs::read_to_string(path_str).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "地點,日期,天氣現象,最低溫(°C),最高溫(°C)");
        assert_eq!(lines.next().unwrap(), "宜蘭,2024-01-01,晴,N/A,24");
        assert_eq!(lines.next(), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_empty_table_leaves_destination_untouched() {
        let path = std::env::temp_dir().join("cwawx_sheet_empty_test.csv");
        let path_str = path.to_str().unwrap();
        std::fs::write(path_str, "pre-existing").unwrap();

        let result = write_spreadsheet(&ForecastTable::assemble(Vec::new()), path_str);
        assert!(matches!(result, Err(SinkError::EmptyTable)));
        assert_eq!(std::fs::read_to_string(path_str).unwrap(), "pre-existing");

        let _ = std::fs::remove_file(&path);
    }
}
