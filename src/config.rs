//! Run configuration: output destinations and the CWA API token.
//!
//! Configuration comes from an optional `cwawx.toml` next to the binary,
//! with every field defaulted, and the API token can always be overridden
//! through the `CWA_API_TOKEN` environment variable (a `.env` file is
//! honored via dotenv). The token is only consumed by the fetch step.

use serde::Deserialize;
use std::env;
use std::path::Path;

/// Default destination paths, matching the artifacts the dashboard reads.
pub const DEFAULT_RAW_JSON: &str = "weather_data.json";
pub const DEFAULT_SPREADSHEET: &str = "weather_report.csv";
pub const DEFAULT_DATABASE: &str = "weather_data.db";
pub const DEFAULT_TABLE_NAME: &str = "weather_forecast";

/// Environment variable holding the CWA open-data authorization token.
pub const TOKEN_ENV_VAR: &str = "CWA_API_TOKEN";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CWA open-data authorization token. Empty means "not configured";
    /// the fetch step rejects an empty token before issuing any request.
    pub api_token: String,
    /// Where the raw fetched document snapshot is written.
    pub raw_json_path: String,
    /// Spreadsheet sink destination.
    pub spreadsheet_path: String,
    /// Relational sink destination (SQLite file).
    pub database_path: String,
    /// Name of the replaced table inside the SQLite file.
    pub table_name: String,
    /// Optional append-only log file.
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_token: String::new(),
            raw_json_path: DEFAULT_RAW_JSON.to_string(),
            spreadsheet_path: DEFAULT_SPREADSHEET.to_string(),
            database_path: DEFAULT_DATABASE.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from the given TOML file, falling back to
    /// defaults when the file is absent. A file that exists but fails to
    /// parse is an error — silently ignoring a typo'd config is worse
    /// than refusing to start.
    pub fn load(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = if Path::new(path).exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Config::default()
        };

        // .env / environment token takes precedence over the config file
        dotenv::dotenv().ok();
        if let Ok(token) = env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                config.api_token = token;
            }
        }

        Ok(config)
    }
}
