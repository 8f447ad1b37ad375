/// Structured logging for the forecast ETL pipeline.
///
/// Provides stage-tagged logging with severity levels. Supports console
/// output and an optional append-only log file for scheduled runs.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline Stages
// ---------------------------------------------------------------------------

/// Which part of the pipeline emitted a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// CWA open-data API fetch.
    Fetch,
    /// Document navigation and normalization.
    Extract,
    /// Spreadsheet sink.
    Sheet,
    /// Relational (SQLite) sink.
    Db,
    /// Everything else: config, startup, summary.
    Sys,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetch => write!(f, "FETCH"),
            Stage::Extract => write!(f, "EXTRACT"),
            Stage::Sheet => write!(f, "SHEET"),
            Stage::Db => write!(f, "DB"),
            Stage::Sys => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>) {
        let logger = Logger { min_level, log_file };
        *LOGGER.lock().unwrap() = Some(logger);
    }

    fn log(&self, level: LogLevel, stage: Stage, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!("{} {} {}: {}", timestamp, level, stage, message);

        match level {
            LogLevel::Error => eprintln!("✗ {}: {}", stage, message),
            LogLevel::Warning => eprintln!("⚠ {}: {}", stage, message),
            LogLevel::Info => println!("{}", message),
            LogLevel::Debug => println!("[DEBUG] {}", message),
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>) {
    Logger::init(min_level, log_file.map(String::from));
}

/// Log a general informational message
pub fn info(stage: Stage, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, stage, message);
    }
}

/// Log a warning message
pub fn warn(stage: Stage, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, stage, message);
    }
}

/// Log an error message
pub fn error(stage: Stage, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, stage, message);
    }
}

/// Log a debug message
pub fn debug(stage: Stage, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, stage, message);
    }
}

// ---------------------------------------------------------------------------
// Sink Result Logging
// ---------------------------------------------------------------------------

/// Log the outcome of one persistence sink. An empty table is a warning,
/// not a failure; anything else that went wrong is an error for that sink
/// only and never aborts the run.
pub fn log_sink_result(stage: Stage, destination: &str, result: &Result<usize, crate::model::SinkError>) {
    match result {
        Ok(rows) => info(stage, &format!("Wrote {} rows to {}", rows, destination)),
        Err(crate::model::SinkError::EmptyTable) => {
            warn(stage, &format!("Skipped {}: {}", destination, crate::model::SinkError::EmptyTable))
        }
        Err(e) => error(stage, &format!("Write to {} failed: {}", destination, e)),
    }
}
