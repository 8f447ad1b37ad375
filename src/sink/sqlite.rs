/// Relational sink: drops and recreates one table in an embedded SQLite
/// file, prepending a synthetic 1-based `id` taken from final sort
/// position. Full-replace semantics — prior contents are discarded, never
/// merged, and the ids are not stable across runs if the row set changes.

use rusqlite::Connection;

use crate::model::{display_or_missing, SinkError};
use crate::table::ForecastTable;

/// Writes the full table into `table_name` inside the SQLite file at
/// `path`, replacing whatever was there.
///
/// Drop, create, and inserts run inside one transaction; SQLite DDL is
/// transactional, so a concurrent reader never observes the table
/// half-dropped. An empty table returns `SinkError::EmptyTable` before
/// the database is opened. Returns the number of data rows written.
pub fn write_table(table: &ForecastTable, path: &str, table_name: &str) -> Result<usize, SinkError> {
    if table.is_empty() {
        return Err(SinkError::EmptyTable);
    }

    let mut conn = Connection::open(path)?;
    let tx = conn.transaction()?;

    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS \"{name}\";
         CREATE TABLE \"{name}\" (
             id INTEGER,
             \"地點\" TEXT,
             \"日期\" TEXT,
             \"天氣現象\" TEXT,
             \"最低溫(°C)\" TEXT,
             \"最高溫(°C)\" TEXT
         );",
        name = table_name
    ))?;

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO \"{}\" VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            table_name
        ))?;

        for (i, record) in table.rows().iter().enumerate() {
            stmt.execute(rusqlite::params![
                (i + 1) as i64,
                record.location,
                record.date,
                display_or_missing(&record.condition),
                display_or_missing(&record.min_temp),
                display_or_missing(&record.max_temp),
            ])?;
        }
    }

    tx.commit()?;
    Ok(table.len())
}

/// Reads the persisted rows back in id order. Used by the dashboard and
/// by the round-trip tests.
pub fn read_rows(
    path: &str,
    table_name: &str,
) -> Result<Vec<(i64, String, String, String, String, String)>, SinkError> {
    let conn = Connection::open(path)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT id, \"地點\", \"日期\", \"天氣現象\", \"最低溫(°C)\", \"最高溫(°C)\"
         FROM \"{}\" ORDER BY id",
        table_name
    ))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ForecastRecord;

    fn record(location: &str, date: &str, min_temp: Option<&str>) -> ForecastRecord {
        ForecastRecord {
            location: location.to_string(),
            date: date.to_string(),
            condition: Some("晴".to_string()),
            min_temp: min_temp.map(String::from),
            max_temp: Some("28".to_string()),
        }
    }

    #[test]
    fn test_full_replace_discards_prior_rows() {
        let path = std::env::temp_dir().join("cwawx_sqlite_replace_test.db");
        let path_str = path.to_str().unwrap();
        let _ = std::fs::remove_file(&path);

        let first = ForecastTable::assemble(vec![
            record("臺中", "2024-01-01", Some("14")),
            record("臺中", "2024-01-02", Some("15")),
        ]);
        write_table(&first, path_str, "weather_forecast").unwrap();

        let second = ForecastTable::assemble(vec![record("花蓮", "2024-02-01", None)]);
        write_table(&second, path_str, "weather_forecast").unwrap();

        let rows = read_rows(path_str, "weather_forecast").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 1);
        assert_eq!(rows[0].1, "花蓮");
        assert_eq!(rows[0].4, "N/A");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_ids_follow_sort_order() {
        let path = std::env::temp_dir().join("cwawx_sqlite_id_test.db");
        let path_str = path.to_str().unwrap();
        let _ = std::fs::remove_file(&path);

        // assemble() sorts 基隆 before 雲林 lexically
        let table = ForecastTable::assemble(vec![
            record("雲林", "2024-01-01", Some("13")),
            record("基隆", "2024-01-01", Some("12")),
        ]);
        write_table(&table, path_str, "weather_forecast").unwrap();

        let rows = read_rows(path_str, "weather_forecast").unwrap();
        assert_eq!(rows[0].0, 1);
        assert_eq!(rows[0].1, "基隆");
        assert_eq!(rows[1].0, 2);
        assert_eq!(rows[1].1, "雲林");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_empty_table_does_not_open_database() {
        let path = std::env::temp_dir().join("cwawx_sqlite_empty_test.db");
        let path_str = path.to_str().unwrap();
        let _ = std::fs::remove_file(&path);

        let result = write_table(&ForecastTable::assemble(Vec::new()), path_str, "weather_forecast");
        assert!(matches!(result, Err(SinkError::EmptyTable)));
        assert!(!path.exists());
    }
}
