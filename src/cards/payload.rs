//! Interpretation of card endpoint response bodies.

use serde_json::Value;
use thiserror::Error;

use crate::models::TravelEntry;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("response is not a travel entry or list of entries: {0}")]
    NotTravelData(#[source] serde_json::Error),

    #[error("expected a JSON array or object, got {0}")]
    UnexpectedShape(&'static str),
}

/// Parse a response body into travel entries.
///
/// Accepts a JSON array of entries, or a single entry object which is
/// treated as a one-element list.
pub fn parse_payload(body: &str) -> Result<Vec<TravelEntry>, PayloadError> {
    let value: Value = serde_json::from_str(body).map_err(PayloadError::InvalidJson)?;

    match value {
        Value::Array(_) => serde_json::from_value(value).map_err(PayloadError::NotTravelData),
        Value::Object(_) => serde_json::from_value::<TravelEntry>(value)
            .map(|entry| vec![entry])
            .map_err(PayloadError::NotTravelData),
        Value::Null => Err(PayloadError::UnexpectedShape("null")),
        Value::Bool(_) => Err(PayloadError::UnexpectedShape("a boolean")),
        Value::Number(_) => Err(PayloadError::UnexpectedShape("a number")),
        Value::String(_) => Err(PayloadError::UnexpectedShape("a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let entries = parse_payload(
            r#"[{"place":"Europe","description":"I want to go here"},{"place":"Las Vegas","description":"I want to go here"}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].place, "Las Vegas");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_payload("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_single_object() {
        let entries = parse_payload(r#"{"place":"Reykjavik","description":"Northern lights"}"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].place, "Reykjavik");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_payload("not json"),
            Err(PayloadError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_payload("null"),
            Err(PayloadError::UnexpectedShape("null"))
        ));
        assert!(matches!(
            parse_payload("42"),
            Err(PayloadError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_parse_rejects_entries_without_description() {
        assert!(matches!(
            parse_payload(r#"[{"place":"x"}]"#),
            Err(PayloadError::NotTravelData(_))
        ));
        assert!(matches!(
            parse_payload(r#"{"place":"x"}"#),
            Err(PayloadError::NotTravelData(_))
        ));
    }

    #[test]
    fn test_parse_rejects_entries_without_place() {
        assert!(matches!(
            parse_payload(r#"[{"description":"no place"}]"#),
            Err(PayloadError::NotTravelData(_))
        ));
    }
}
