//! Log file descriptors and listing payload parsing
//!
//! Descriptors are immutable value types produced only by decoding a listing
//! response. The wire shape is a single `logFiles` key holding an array of
//! file objects.

use serde::{Deserialize, Serialize};

use crate::errors::PayloadResult;

/// One remote log file as reported by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFileInfo {
    /// File name, unique per application
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// Human-readable description assigned by the platform
    pub description: String,

    /// Last modification time, epoch milliseconds
    pub last_modified: u64,

    /// Identifier of the process that owns the file
    pub process_id: String,
}

/// Wire shape of the listing response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPayload {
    log_files: Vec<LogFileInfo>,
}

/// Decodes a listing response body into descriptors, preserving input order.
///
/// A missing or `null` `logFiles` key is malformed; the well-formed way to
/// report no files is an empty array. Unknown extra fields are ignored.
pub fn parse_log_list(bytes: &[u8]) -> PayloadResult<Vec<LogFileInfo>> {
    let payload: ListPayload = serde_json::from_slice(bytes)?;
    Ok(payload.log_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, last_modified: u64) -> LogFileInfo {
        LogFileInfo {
            name: name.to_string(),
            size: 1024,
            description: "Default trace log".to_string(),
            last_modified,
            process_id: "web_1".to_string(),
        }
    }

    #[test]
    fn test_parse_preserves_order_and_fields() {
        let body = br#"{
            "logFiles": [
                {"name": "b.log", "size": 10, "description": "second", "lastModified": 200, "processId": "p2"},
                {"name": "a.log", "size": 20, "description": "first", "lastModified": 100, "processId": "p1"}
            ]
        }"#;

        let files = parse_log_list(body).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "b.log");
        assert_eq!(files[0].size, 10);
        assert_eq!(files[0].description, "second");
        assert_eq!(files[0].last_modified, 200);
        assert_eq!(files[0].process_id, "p2");
        assert_eq!(files[1].name, "a.log");
    }

    #[test]
    fn test_parse_empty_array_is_empty_listing() {
        let files = parse_log_list(br#"{"logFiles": []}"#).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_parse_missing_key_is_malformed() {
        assert!(parse_log_list(br#"{"files": []}"#).is_err());
    }

    #[test]
    fn test_parse_null_key_is_malformed() {
        assert!(parse_log_list(br#"{"logFiles": null}"#).is_err());
    }

    #[test]
    fn test_parse_wrong_field_type_is_malformed() {
        let body = br#"{"logFiles": [
            {"name": "a.log", "size": "big", "description": "", "lastModified": 1, "processId": "p"}
        ]}"#;
        assert!(parse_log_list(body).is_err());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let body = br#"{"logFiles": [
            {"name": "a.log", "size": 1, "description": "", "lastModified": 1, "processId": "p", "owner": "x"}
        ], "nextPage": 2}"#;
        let files = parse_log_list(body).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_round_trip_is_identity() {
        let original = vec![descriptor("a.log", 100), descriptor("b.log", 200)];
        let payload = ListPayload {
            log_files: original.clone(),
        };
        let encoded = serde_json::to_vec(&payload).unwrap();
        let decoded = parse_log_list(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_descriptor_serializes_with_wire_field_names() {
        let json = serde_json::to_value(descriptor("a.log", 100)).unwrap();
        assert!(json.get("lastModified").is_some());
        assert!(json.get("processId").is_some());
        assert!(json.get("last_modified").is_none());
    }
}
