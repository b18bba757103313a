//! Working-set ingestion: pasted/uploaded JSON, the sample set, and the
//! optional remote document importer for PDFs.

pub mod handlers;
pub mod importer;
pub mod sample;

use serde_json::Value;
use thiserror::Error;

use crate::models::candidate::Candidate;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("JSON must be an array of resumes")]
    NotAnArray,
}

/// Decodes a JSON document that must be an array of candidate objects.
///
/// Elements are decoded leniently (absent or null fields default); only a
/// non-array root or an element of the wrong JSON type is rejected.
pub fn parse_candidates(raw: &[u8]) -> Result<Vec<Candidate>, IngestError> {
    let value: Value = serde_json::from_slice(raw)?;
    candidates_from_value(value)
}

pub fn candidates_from_value(value: Value) -> Result<Vec<Candidate>, IngestError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(IngestError::from))
            .collect(),
        _ => Err(IngestError::NotAnArray),
    }
}

/// Upload kinds recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Json,
    Pdf,
}

impl UploadKind {
    pub fn from_file_name(name: &str) -> Option<UploadKind> {
        let lower = name.to_lowercase();
        if lower.ends_with(".json") {
            Some(UploadKind::Json)
        } else if lower.ends_with(".pdf") {
            Some(UploadKind::Pdf)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_of_partial_records() {
        let raw = br#"[{"id":"A","name":"Ann","yearsExp":2},{"id":2,"skills":["Go"]}]"#;
        let parsed = parse_candidates(raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].years_exp, 2.0);
        assert_eq!(parsed[1].id, "2");
        assert_eq!(parsed[1].skills, vec!["Go"]);
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_candidates(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_object_root_is_rejected() {
        let err = parse_candidates(br#"{"id":"A"}"#).unwrap_err();
        assert!(matches!(err, IngestError::NotAnArray));
        assert_eq!(err.to_string(), "JSON must be an array of resumes");
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            parse_candidates(b"[{"),
            Err(IngestError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_upload_kind_by_extension() {
        assert_eq!(UploadKind::from_file_name("cvs.JSON"), Some(UploadKind::Json));
        assert_eq!(UploadKind::from_file_name("resume.pdf"), Some(UploadKind::Pdf));
        assert_eq!(UploadKind::from_file_name("resumes.csv"), None);
    }
}
