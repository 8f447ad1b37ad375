//! Safe traversal of the raw CWA forecast document.
//!
//! The F-A0010-001 feed nests its per-location forecasts six levels deep:
//!
//!   cwaopendata → resources → resource → data
//!     → agrWeatherForecasts → weatherForecasts → location[]
//!
//! Every segment on that path is mandatory; anything missing or of the
//! wrong container type means the feed changed shape and the run must
//! abort. Leaf fields elsewhere in the document (element lists, names,
//! dates) are optional and are defaulted by the normalizer, never here.

use serde_json::Value;

use crate::model::ExtractError;

/// Mandatory object segments between the document root and the location
/// list, in traversal order.
const LOCATION_PATH: &[&str] = &[
    "cwaopendata",
    "resources",
    "resource",
    "data",
    "agrWeatherForecasts",
    "weatherForecasts",
];

/// Segment name of the location list itself, kept separate because it is
/// an array rather than an object.
const LOCATION_KEY: &str = "location";

/// Walks the fixed path down to the per-location forecast list.
///
/// Returns `ExtractError::Structure` naming the first segment that is
/// absent or not an object (or, for the final hop, not an array), and
/// `ExtractError::EmptyResult` when the path resolves but the list has
/// no entries. Callers rely on that distinction: a malformed document
/// and a well-formed-but-empty one are different failures.
pub fn locations(doc: &Value) -> Result<&[Value], ExtractError> {
    let mut node = doc;
    for segment in LOCATION_PATH {
        node = node
            .get(segment)
            .filter(|v| v.is_object())
            .ok_or_else(|| ExtractError::Structure(segment.to_string()))?;
    }

    let list = node
        .get(LOCATION_KEY)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ExtractError::Structure(LOCATION_KEY.to_string()))?;

    if list.is_empty() {
        return Err(ExtractError::EmptyResult);
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap_locations(locations: Value) -> Value {
        json!({
            "cwaopendata": {
                "resources": {
                    "resource": {
                        "data": {
                            "agrWeatherForecasts": {
                                "weatherForecasts": {
                                    "location": locations
                                }
                            }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_resolves_location_list() {
        let doc = wrap_locations(json!([{"locationName": "臺北"}]));
        let list = locations(&doc).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["locationName"], "臺北");
    }

    #[test]
    fn test_missing_root_is_structure_error() {
        let doc = json!({"somethingElse": {}});
        assert_eq!(
            locations(&doc),
            Err(ExtractError::Structure("cwaopendata".to_string()))
        );
    }

    #[test]
    fn test_wrong_shaped_mid_segment_names_the_segment() {
        // "resource" is a string instead of an object
        let doc = json!({
            "cwaopendata": {
                "resources": { "resource": "not-an-object" }
            }
        });
        assert_eq!(
            locations(&doc),
            Err(ExtractError::Structure("resource".to_string()))
        );
    }

    #[test]
    fn test_location_not_an_array_is_structure_error() {
        let doc = wrap_locations(json!({"oops": true}));
        assert_eq!(
            locations(&doc),
            Err(ExtractError::Structure("location".to_string()))
        );
    }

    #[test]
    fn test_empty_location_list_is_empty_result() {
        let doc = wrap_locations(json!([]));
        assert_eq!(locations(&doc), Err(ExtractError::EmptyResult));
    }
}
