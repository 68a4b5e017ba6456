//! Report records exchanged with the host application

use crate::flags::{ErrorClassSet, ResourceTypeSet};
use serde::{Deserialize, Serialize};

/// Storage id of a report that has not been persisted yet
pub const UNSET_ID: i64 = -1;

fn unset_id() -> i64 {
    UNSET_ID
}

/// A report request as submitted by a user
///
/// Both fields are comma-separated identifier lists. Spaces anywhere in
/// them are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReportRequest {
    pub resource_types: String,
    pub error_classes: String,
}

impl RawReportRequest {
    pub fn new(resource_types: impl Into<String>, error_classes: impl Into<String>) -> Self {
        Self {
            resource_types: resource_types.into(),
            error_classes: error_classes.into(),
        }
    }
}

/// Normalized error report, as stored and as rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    /// Assigned by storage; [`UNSET_ID`] until then
    #[serde(default = "unset_id")]
    pub id: i64,
    pub resource_types: ResourceTypeSet,
    pub error_types: ErrorClassSet,
    #[serde(default)]
    pub message: String,
}

impl ErrorReport {
    /// A new, unsaved report with an empty message
    pub fn new(resource_types: ResourceTypeSet, error_types: ErrorClassSet) -> Self {
        Self {
            id: UNSET_ID,
            resource_types,
            error_types,
            message: String::new(),
        }
    }

    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    /// Whether storage has assigned an id
    pub fn is_saved(&self) -> bool {
        self.id != UNSET_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_unsaved() {
        let report = ErrorReport::new(ResourceTypeSet::from_bits(1), ErrorClassSet::from_bits(4));
        assert_eq!(report.id, UNSET_ID);
        assert!(!report.is_saved());
        assert!(report.message.is_empty());
    }

    #[test]
    fn test_builders_keep_masks() {
        let report = ErrorReport::new(ResourceTypeSet::from_bits(3), ErrorClassSet::from_bits(2))
            .with_message("timeout")
            .with_id(42);
        assert_eq!(report.id, 42);
        assert!(report.is_saved());
        assert_eq!(report.message, "timeout");
        assert_eq!(report.resource_types.bits(), 3);
        assert_eq!(report.error_types.bits(), 2);
    }

    #[test]
    fn test_request_json_field_names() {
        let request: RawReportRequest =
            serde_json::from_str(r#"{"resourceTypes": "feed, article", "errorClasses": "malformed"}"#)
                .unwrap();
        assert_eq!(request, RawReportRequest::new("feed, article", "malformed"));
    }

    #[test]
    fn test_report_json_shape() {
        let report = ErrorReport::new(ResourceTypeSet::from_bits(1), ErrorClassSet::from_bits(4))
            .with_message("timeout");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": -1,
                "resourceTypes": 1,
                "errorTypes": 4,
                "message": "timeout"
            })
        );
    }

    #[test]
    fn test_report_json_defaults() {
        let report: ErrorReport =
            serde_json::from_str(r#"{"resourceTypes": 2, "errorTypes": 1}"#).unwrap();
        assert_eq!(report.id, UNSET_ID);
        assert_eq!(report.message, "");
    }
}
