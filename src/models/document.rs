//! Document model representing a paper surfaced by any backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum abstract length before truncation.
pub const ABSTRACT_MAX_CHARS: usize = 200;

/// The backend a document was retrieved from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "arXiv")]
    Arxiv,
    #[serde(rename = "Semantic Scholar")]
    SemanticScholar,
    #[serde(untagged)]
    Other(String),
}

impl SourceType {
    /// Returns the display name of the source
    pub fn name(&self) -> &str {
        match self {
            SourceType::Arxiv => "arXiv",
            SourceType::SemanticScholar => "Semantic Scholar",
            SourceType::Other(s) => s,
        }
    }

    /// Returns the source identifier (used for logging and filtering)
    pub fn id(&self) -> &str {
        match self {
            SourceType::Arxiv => "arxiv",
            SourceType::SemanticScholar => "semantic",
            SourceType::Other(s) => s,
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A paper or article record in the normalized cross-backend format.
///
/// Backends map their native payloads (Atom entries, graph-API JSON) into
/// this shape before any merging happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Backend-assigned identifier; must be non-empty and unique within one
    /// backend's result set before merge
    pub id: String,

    /// Document title, whitespace-collapsed
    pub title: String,

    /// Authors in the order the backend listed them
    pub authors: Vec<String>,

    /// Abstract, truncated to [`ABSTRACT_MAX_CHARS`] with a trailing ellipsis
    /// marker when shortened
    pub r#abstract: String,

    /// Direct PDF URL
    pub pdf_url: String,

    /// Landing page URL
    pub source_url: String,

    /// Publication date as a display string
    pub published_date: String,

    /// Original machine timestamp, kept for recency sorting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Backend that produced this document
    pub source: SourceType,
}

impl Document {
    /// Create a new document with required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, source: SourceType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            r#abstract: String::new(),
            pdf_url: String::new(),
            source_url: String::new(),
            published_date: String::new(),
            published_at: None,
            source,
        }
    }

    /// Display name of the backend this document came from
    pub fn source_name(&self) -> &str {
        self.source.name()
    }
}

/// Truncate an abstract to the display limit, appending an ellipsis marker
/// when anything was cut. Operates on characters, not bytes.
pub fn truncate_abstract(text: &str) -> String {
    let mut out: String = text.chars().take(ABSTRACT_MAX_CHARS).collect();
    if text.chars().count() > ABSTRACT_MAX_CHARS {
        out.push_str("...");
    }
    out
}

/// Builder for constructing Document objects
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new builder with required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, source: SourceType) -> Self {
        Self {
            document: Document::new(id, title, source),
        }
    }

    /// Set authors
    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.document.authors = authors;
        self
    }

    /// Set abstract text, applying the display truncation rule
    pub fn abstract_text(mut self, text: impl AsRef<str>) -> Self {
        self.document.r#abstract = truncate_abstract(text.as_ref());
        self
    }

    /// Set PDF URL
    pub fn pdf_url(mut self, url: impl Into<String>) -> Self {
        self.document.pdf_url = url.into();
        self
    }

    /// Set landing page URL
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.document.source_url = url.into();
        self
    }

    /// Set the display publication date
    pub fn published_date(mut self, date: impl Into<String>) -> Self {
        self.document.published_date = date.into();
        self
    }

    /// Set the machine publication timestamp
    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.document.published_at = Some(at);
        self
    }

    /// Build the Document
    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_builder() {
        let at = Utc.with_ymd_and_hms(2023, 1, 15, 10, 0, 0).unwrap();
        let doc = DocumentBuilder::new("2301.12345", "Test Paper", SourceType::Arxiv)
            .authors(vec!["John Doe".into(), "Jane Smith".into()])
            .abstract_text("A short abstract.")
            .pdf_url("https://arxiv.org/pdf/2301.12345.pdf")
            .source_url("https://arxiv.org/abs/2301.12345")
            .published_date("1/15/2023")
            .published_at(at)
            .build();

        assert_eq!(doc.id, "2301.12345");
        assert_eq!(doc.authors.len(), 2);
        assert_eq!(doc.r#abstract, "A short abstract.");
        assert_eq!(doc.published_at, Some(at));
        assert_eq!(doc.source_name(), "arXiv");
    }

    #[test]
    fn test_truncate_abstract_short_text_untouched() {
        assert_eq!(truncate_abstract("short"), "short");
    }

    #[test]
    fn test_truncate_abstract_long_text_marked() {
        let long = "a".repeat(250);
        let truncated = truncate_abstract(&long);
        assert_eq!(truncated.chars().count(), ABSTRACT_MAX_CHARS + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_abstract_exact_boundary() {
        let exact = "b".repeat(ABSTRACT_MAX_CHARS);
        assert_eq!(truncate_abstract(&exact), exact);
    }

    #[test]
    fn test_truncate_abstract_multibyte() {
        let text = "é".repeat(220);
        let truncated = truncate_abstract(&text);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), ABSTRACT_MAX_CHARS + 3);
    }

    #[test]
    fn test_source_type_ids() {
        assert_eq!(SourceType::Arxiv.id(), "arxiv");
        assert_eq!(SourceType::SemanticScholar.id(), "semantic");
        assert_eq!(SourceType::Other("custom".into()).name(), "custom");
    }
}
