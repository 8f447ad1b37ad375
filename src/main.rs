//! Pipeline entry point: fetch (or load) the raw forecast document,
//! normalize it, and fan out to both persistence sinks.
//!
//! Usage:
//!   cwawx_service               fetch from the CWA API and process
//!   cwawx_service <file.json>   process a previously saved snapshot

use std::process::ExitCode;

use cwawx_service::config::Config;
use cwawx_service::logging::{self, LogLevel, Stage};
use cwawx_service::{ingest, process_document};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load("cwawx.toml")?;
    logging::init_logger(LogLevel::Info, config.log_file.as_deref());

    // Either replay a local snapshot or fetch live data.
    let doc = match std::env::args().nth(1) {
        Some(path) => {
            logging::info(Stage::Sys, &format!("Reading local snapshot {}", path));
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        }
        None => {
            logging::info(Stage::Fetch, &format!("Fetching dataset {}", ingest::cwa::DATASET_ID));
            let client = ingest::cwa::build_client()?;
            let doc = ingest::cwa::fetch_forecast(&client, &config.api_token)?;
            ingest::cwa::save_raw_snapshot(&doc, &config.raw_json_path)?;
            logging::info(Stage::Fetch, &format!("Snapshot saved to {}", config.raw_json_path));
            doc
        }
    };

    let report = process_document(
        &doc,
        &config.spreadsheet_path,
        &config.database_path,
        &config.table_name,
    )?;

    if report.all_ok() {
        logging::info(Stage::Sys, "Run complete");
        Ok(())
    } else {
        Err("one or more sinks failed, see log above".into())
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}
