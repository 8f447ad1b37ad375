//! The assembled forecast table handed to the persistence sinks.

use crate::model::{
    ForecastRecord, COL_CONDITION, COL_DATE, COL_LOCATION, COL_MAX_TEMP, COL_MIN_TEMP,
};

/// The final, ordered forecast table. Built from scratch on every run
/// (full-replace, no merging with prior output) and shared read-only by
/// both sinks.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTable {
    rows: Vec<ForecastRecord>,
}

impl ForecastTable {
    /// Assembles the table from the unsorted record set.
    ///
    /// Rows are sorted by (location, date), both compared as plain
    /// strings. The sort is stable, so equal keys keep their input
    /// order. Lexical comparison is a deliberate limitation: the feed's
    /// zero-padded ISO dates sort chronologically as strings, and no
    /// calendar parsing is attempted.
    pub fn assemble(mut rows: Vec<ForecastRecord>) -> Self {
        rows.sort_by(|a, b| {
            a.location
                .cmp(&b.location)
                .then_with(|| a.date.cmp(&b.date))
        });
        ForecastTable { rows }
    }

    /// Column headers in output order, shared by both sinks.
    pub fn headers() -> [&'static str; 5] {
        [COL_LOCATION, COL_DATE, COL_CONDITION, COL_MIN_TEMP, COL_MAX_TEMP]
    }

    pub fn rows(&self) -> &[ForecastRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location: &str, date: &str) -> ForecastRecord {
        ForecastRecord {
            location: location.to_string(),
            date: date.to_string(),
            condition: None,
            min_temp: None,
            max_temp: None,
        }
    }

    #[test]
    fn test_sorts_by_location_then_date() {
        let table = ForecastTable::assemble(vec![
            record("B", "2024-01-02"),
            record("A", "2024-01-02"),
            record("B", "2024-01-01"),
            record("A", "2024-01-01"),
        ]);

        let keys: Vec<(&str, &str)> = table
            .rows()
            .iter()
            .map(|r| (r.location.as_str(), r.date.as_str()))
            .collect();

        assert_eq!(
            keys,
            vec![
                ("A", "2024-01-01"),
                ("A", "2024-01-02"),
                ("B", "2024-01-01"),
                ("B", "2024-01-02"),
            ]
        );
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let rows = vec![
            record("乙", "2024-03-02"),
            record("甲", "2024-03-01"),
            record("甲", "2024-02-28"),
        ];
        assert_eq!(
            ForecastTable::assemble(rows.clone()),
            ForecastTable::assemble(rows)
        );
    }

    #[test]
    fn test_empty_table() {
        let table = ForecastTable::assemble(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
