/// CWA (Central Weather Administration) Open Data API Client
///
/// Retrieves the F-A0010-001 agricultural weather forecast dataset from
/// the Taiwan CWA open-data file API. The response is a deeply nested
/// JSON document; this module only fetches and snapshots it — all shape
/// interpretation happens in `navigate` and `normalize`.
///
/// API documentation: https://opendata.cwa.gov.tw/

use serde_json::Value;
use std::time::Duration;

const CWA_BASE_URL: &str = "https://opendata.cwa.gov.tw";

/// Dataset identifier of the agricultural weather forecast feed.
pub const DATASET_ID: &str = "F-A0010-001";

// ============================================================================
// API Client Functions
// ============================================================================

/// Build the file-API download URL for the forecast dataset.
pub fn build_forecast_url(api_token: &str) -> String {
    format!(
        "{}/fileapi/v1/opendataapi/{}?Authorization={}&downloadType=WEB&format=JSON",
        CWA_BASE_URL, DATASET_ID, api_token
    )
}

/// Shared blocking client with a bounded timeout.
pub fn build_client() -> Result<reqwest::blocking::Client, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    Ok(client)
}

/// Fetch the raw forecast document.
///
/// # Parameters
/// - `client`: HTTP client
/// - `api_token`: CWA open-data authorization token
///
/// # Returns
/// The parsed JSON document, structure unverified — navigation and
/// validation are the caller's concern.
pub fn fetch_forecast(
    client: &reqwest::blocking::Client,
    api_token: &str,
) -> Result<Value, Box<dyn std::error::Error>> {
    if api_token.is_empty() {
        return Err("CWA API token is not configured".into());
    }

    let url = build_forecast_url(api_token);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()?;

    if !response.status().is_success() {
        return Err(format!("CWA API error: {}", response.status()).into());
    }

    let doc: Value = response.json()?;
    Ok(doc)
}

/// Snapshot the raw document to disk so the dashboard (and reruns) can
/// read it without refetching.
pub fn save_raw_snapshot(doc: &Value, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let pretty = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, pretty)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
