//! Response envelope returned by the search operation.

use serde::{Deserialize, Serialize};

use crate::models::{DigestResult, Document};

/// Final envelope combining the digest and the merged document list, or an
/// error when the request failed before a digest could be produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<DigestResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Document>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SearchResponse {
    /// Assemble a success envelope echoing the request parameters.
    pub fn ok(
        digest: DigestResult,
        documents: Vec<Document>,
        query: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            success: true,
            digest: Some(digest),
            documents: Some(documents),
            query: Some(query.into()),
            category,
            error: None,
            details: None,
        }
    }

    /// Assemble a failure envelope with a generic error and optional details.
    pub fn failure(error: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            digest: None,
            documents: None,
            query: None,
            category: None,
            error: Some(error.into()),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_shape() {
        let response = SearchResponse::ok(
            DigestResult::default(),
            Vec::new(),
            "zk rollups",
            Some("Scaling".to_string()),
        );
        assert!(response.success);
        assert_eq!(response.query.as_deref(), Some("zk rollups"));
        assert!(response.error.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_envelope_shape() {
        let response = SearchResponse::failure("Failed to search", Some("backend down".into()));
        assert!(!response.success);
        assert!(response.digest.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Failed to search");
        assert_eq!(json["details"], "backend down");
        assert!(json.get("digest").is_none());
    }
}
