/// Core data types for the CWA agricultural forecast service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies — only types.

// ---------------------------------------------------------------------------
// Source element names
// ---------------------------------------------------------------------------

/// CWA element name for the weather condition series (e.g. "多雲時晴").
pub const ELEMENT_CONDITION: &str = "Wx";

/// CWA element name for the daily minimum temperature series, in °C.
pub const ELEMENT_MIN_TEMP: &str = "MinT";

/// CWA element name for the daily maximum temperature series, in °C.
pub const ELEMENT_MAX_TEMP: &str = "MaxT";

/// Fallback name for a location entry missing its `locationName` field.
pub const UNKNOWN_LOCATION: &str = "未知地點";

// ---------------------------------------------------------------------------
// Output columns
// ---------------------------------------------------------------------------

/// Column headers of the persisted table, in output order. These match the
/// upstream feed's locale and are shared verbatim by both sinks.
pub const COL_LOCATION: &str = "地點";
pub const COL_DATE: &str = "日期";
pub const COL_CONDITION: &str = "天氣現象";
pub const COL_MIN_TEMP: &str = "最低溫(°C)";
pub const COL_MAX_TEMP: &str = "最高溫(°C)";

/// Sentinel written to the sinks when a measurement is absent. Inside the
/// pipeline an absent measurement is `None`; the sentinel only exists at
/// the serialization boundary.
pub const MISSING_VALUE: &str = "N/A";

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// Per-date accumulator for one location, filled incrementally as each of
/// the three series contributes its value for that date. Created lazily on
/// first contribution; a field stays `None` if its series never mentions
/// the date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyComposite {
    pub condition: Option<String>,
    pub min_temp: Option<String>,
    pub max_temp: Option<String>,
}

/// One flattened forecast row: a single (location, date) pair with all
/// three merged measurements. This is the unit persisted downstream.
///
/// `date` is kept as the verbatim source string. The feed emits zero-padded
/// ISO dates ("2024-01-02"), so lexical order matches chronological order;
/// no calendar parsing happens anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub location: String,
    pub date: String,
    pub condition: Option<String>,
    pub min_temp: Option<String>,
    pub max_temp: Option<String>,
}

impl ForecastRecord {
    pub fn from_composite(location: &str, date: &str, composite: DailyComposite) -> Self {
        ForecastRecord {
            location: location.to_string(),
            date: date.to_string(),
            condition: composite.condition,
            min_temp: composite.min_temp,
            max_temp: composite.max_temp,
        }
    }
}

/// Serialization-boundary helper: an absent measurement becomes the
/// `MISSING_VALUE` sentinel, a present one passes through verbatim.
pub fn display_or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING_VALUE)
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise while navigating and normalizing the raw forecast
/// document. All three variants are fatal for the run — no sink is written
/// after any of them.
#[derive(Debug, PartialEq)]
pub enum ExtractError {
    /// A mandatory segment of the fixed navigation path was missing or had
    /// the wrong container type. Carries the name of the offending segment.
    Structure(String),
    /// The document was well-formed but its location list was empty.
    EmptyResult,
    /// Locations existed but produced zero dated records.
    NoRecords,
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Structure(segment) => {
                write!(f, "Malformed document: missing or wrong-shaped segment '{}'", segment)
            }
            ExtractError::EmptyResult => write!(f, "No locations found in document"),
            ExtractError::NoRecords => write!(f, "Locations present but no dated records produced"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Per-sink failures. Non-fatal to the run: each sink reports its own
/// result and never rolls back or suppresses the other.
#[derive(Debug)]
pub enum SinkError {
    /// The table had zero rows at sink time. A warning, not a failure — the
    /// destination file is left untouched.
    EmptyTable,
    Io(std::io::Error),
    Csv(csv::Error),
    Sqlite(rusqlite::Error),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::EmptyTable => write!(f, "Table is empty, nothing to write"),
            SinkError::Io(e) => write!(f, "I/O error: {}", e),
            SinkError::Csv(e) => write!(f, "CSV write error: {}", e),
            SinkError::Sqlite(e) => write!(f, "SQLite error: {}", e),
        }
    }
}

impl std::error::Error for SinkError {}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        SinkError::Io(e)
    }
}

impl From<csv::Error> for SinkError {
    fn from(e: csv::Error) -> Self {
        SinkError::Csv(e)
    }
}

impl From<rusqlite::Error> for SinkError {
    fn from(e: rusqlite::Error) -> Self {
        SinkError::Sqlite(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_or_missing() {
        assert_eq!(display_or_missing(&Some("23".to_string())), "23");
        assert_eq!(display_or_missing(&None), MISSING_VALUE);
    }

    #[test]
    fn test_extract_error_display_names_segment() {
        let err = ExtractError::Structure("weatherForecasts".to_string());
        assert!(err.to_string().contains("weatherForecasts"));
    }

    #[test]
    fn test_empty_and_no_records_are_distinct() {
        assert_ne!(ExtractError::EmptyResult, ExtractError::NoRecords);
    }
}
