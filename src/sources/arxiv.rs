//! arXiv literature backend (Backend A).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use feed_rs::parser;
use std::sync::Arc;

use crate::models::{Document, DocumentBuilder, SourceType};
use crate::sources::{Source, SourceError};
use crate::utils::{api_retry_config, with_retry, HttpClient};

/// Base URL for the arXiv API
const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";
/// Base URL for arXiv PDFs
const ARXIV_PDF_URL: &str = "https://arxiv.org/pdf";
/// Base URL for arXiv abstract pages
const ARXIV_ABS_URL: &str = "https://arxiv.org/abs";

/// arXiv backend issuing field-scoped boolean expressions and parsing the
/// Atom response feed.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: Arc<HttpClient>,
    base_url: String,
}

impl ArxivSource {
    /// Create a new arXiv source
    pub fn new() -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: ARXIV_API_URL.to_string(),
        }
    }

    /// Create with a custom HTTP client (for testing)
    pub fn with_client(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            base_url: ARXIV_API_URL.to_string(),
        }
    }

    /// Override the API base URL (for testing against a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_url(&self, expression: &str, limit: usize) -> String {
        format!(
            "{}?search_query={}&start=0&max_results={}&sortBy=relevance&sortOrder=descending",
            self.base_url,
            urlencoding::encode(expression),
            limit
        )
    }

    /// Collapse runs of whitespace to single spaces; the Atom feed wraps
    /// titles and abstracts across indented lines.
    fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Parse one Atom entry into a Document
    fn parse_entry(entry: &feed_rs::model::Entry) -> Result<Document, SourceError> {
        // Entry id is the abstract URL; the last path segment is the arXiv id
        // with an optional version suffix, which we strip so the same paper
        // dedupes across versions.
        let arxiv_id = entry
            .id
            .rsplit('/')
            .next()
            .map(|s| s.split('v').next().unwrap_or(s))
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SourceError::Parse("Missing arXiv id".to_string()))?
            .to_string();

        let title = entry
            .title
            .as_ref()
            .map(|t| Self::collapse_whitespace(&t.content))
            .unwrap_or_default();

        let summary = entry
            .summary
            .as_ref()
            .map(|s| Self::collapse_whitespace(&s.content))
            .unwrap_or_default();

        let authors: Vec<String> = entry
            .authors
            .iter()
            .map(|a| a.name.clone())
            .filter(|name| !name.is_empty())
            .collect();

        let published: Option<DateTime<Utc>> = entry.published;
        let display_date = published
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_default();

        let abstract_url = format!("{}/{}", ARXIV_ABS_URL, arxiv_id);

        let mut builder = DocumentBuilder::new(arxiv_id.clone(), title, SourceType::Arxiv)
            .authors(authors)
            .abstract_text(summary)
            .pdf_url(format!("{}/{}.pdf", ARXIV_PDF_URL, arxiv_id))
            .source_url(abstract_url)
            .published_date(display_date);
        if let Some(at) = published {
            builder = builder.published_at(at);
        }

        Ok(builder.build())
    }
}

impl Default for ArxivSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for ArxivSource {
    fn id(&self) -> &str {
        "arxiv"
    }

    fn name(&self) -> &str {
        "arXiv"
    }

    async fn search(&self, expression: &str, limit: usize) -> Result<Vec<Document>, SourceError> {
        let url = self.request_url(expression, limit);

        let client = Arc::clone(&self.client);
        let url_for_retry = url.clone();

        let feed = with_retry(api_retry_config(), || {
            let client = Arc::clone(&client);
            let url = url_for_retry.clone();
            async move {
                let response = client
                    .get(&url)
                    .header("Accept", "application/atom+xml")
                    .send()
                    .await
                    .map_err(|e| {
                        SourceError::Network(format!("Failed to fetch arXiv results: {}", e))
                    })?;

                if !response.status().is_success() {
                    return Err(SourceError::Api(format!(
                        "arXiv API returned status: {}",
                        response.status()
                    )));
                }

                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

                parser::parse(bytes.as_ref())
                    .map_err(|e| SourceError::Parse(format!("Failed to parse Atom feed: {}", e)))
            }
        })
        .await?;

        feed.entries.iter().map(Self::parse_entry).collect()
    }
}
