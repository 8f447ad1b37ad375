/// Data retrieval from upstream open-data APIs.
///
/// Submodules:
/// - `cwa` — Central Weather Administration file-API client for the
///   F-A0010-001 agricultural weather forecast feed.

pub mod cwa;
