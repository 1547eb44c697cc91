//! The commentary record produced by the model for one report run.

use serde::Deserialize;

use crate::domain::AppError;

/// Field keys the model must return, in prompt order.
pub const REQUIRED_FIELDS: [&str; 14] = [
    "kospi_driver",
    "kosdaq_driver",
    "kospi_flow_comment",
    "kosdaq_flow_comment",
    "fx_driver",
    "score_comment",
    "dxy_driver",
    "us_rate_driver",
    "flow_driver",
    "trade_driver",
    "overseas1",
    "overseas2",
    "domestic1",
    "domestic2",
];

/// One day's generated commentary strings.
///
/// Created fresh from the model response on every run and discarded after
/// the page write completes. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommentaryRecord {
    pub kospi_driver: String,
    pub kosdaq_driver: String,
    pub kospi_flow_comment: String,
    pub kosdaq_flow_comment: String,
    pub fx_driver: String,
    pub score_comment: String,
    pub dxy_driver: String,
    pub us_rate_driver: String,
    pub flow_driver: String,
    pub trade_driver: String,
    pub overseas1: String,
    pub overseas2: String,
    pub domestic1: String,
    pub domestic2: String,
}

impl CommentaryRecord {
    /// Build a record from a parsed JSON payload.
    ///
    /// Fields that are absent, null, or not strings are all collected before
    /// failing so the error names every offender at once.
    pub fn from_value(value: serde_json::Value) -> Result<Self, AppError> {
        let object = value
            .as_object()
            .ok_or_else(|| AppError::MalformedResponse("expected a JSON object".to_string()))?;

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|key| !object.get(**key).is_some_and(|field| field.is_string()))
            .map(|key| (*key).to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::MissingFields { missing });
        }

        serde_json::from_value(value).map_err(|e| AppError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn full_payload() -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for key in REQUIRED_FIELDS {
            object.insert(key.to_string(), json!(format!("{key} 한줄")));
        }
        serde_json::Value::Object(object)
    }

    #[test]
    fn full_payload_parses() {
        let record = CommentaryRecord::from_value(full_payload()).unwrap();
        assert_eq!(record.kospi_driver, "kospi_driver 한줄");
        assert_eq!(record.domestic2, "domestic2 한줄");
    }

    #[test]
    fn missing_fields_are_all_named() {
        let mut payload = full_payload();
        let object = payload.as_object_mut().unwrap();
        object.remove("fx_driver");
        object.remove("overseas2");

        let err = CommentaryRecord::from_value(payload).unwrap_err();
        match err {
            AppError::MissingFields { missing } => {
                assert_eq!(missing, vec!["fx_driver".to_string(), "overseas2".to_string()]);
            }
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn null_field_counts_as_missing() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().insert("score_comment".to_string(), json!(null));

        let err = CommentaryRecord::from_value(payload).unwrap_err();
        assert!(err.to_string().contains("score_comment"));
    }

    #[test]
    fn non_object_payload_is_malformed() {
        let err = CommentaryRecord::from_value(json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn extra_fields_are_tolerated() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().insert("commentary".to_string(), json!("덤"));
        assert!(CommentaryRecord::from_value(payload).is_ok());
    }
}
