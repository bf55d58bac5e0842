//! Semantic Scholar paper-graph backend (Backend B).

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::models::{Document, DocumentBuilder, SourceType};
use crate::sources::{Source, SourceError};
use crate::utils::{api_retry_config, with_retry, HttpClient};

const SEMANTIC_API_BASE: &str = "https://api.semanticscholar.org/graph/v1";

/// Fields requested from the graph API for each paper.
const PAPER_FIELDS: &str = "title,authors,abstract,url,year,publicationDate,paperId";

/// Semantic Scholar backend issuing a single plain-text query against the
/// Graph API paper search endpoint.
#[derive(Debug, Clone)]
pub struct SemanticScholarSource {
    client: Arc<HttpClient>,
    base_url: String,
    api_key: Option<String>,
}

impl SemanticScholarSource {
    /// Create a new Semantic Scholar source. The API key is optional and
    /// only raises rate limits.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: SEMANTIC_API_BASE.to_string(),
            api_key,
        }
    }

    /// Create with a custom base URL (for testing against a local server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(HttpClient::new()),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    fn add_api_key_if_present(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref key) = self.api_key {
            builder.header("x-api-key", key)
        } else {
            builder
        }
    }

    fn parse_paper(data: &S2Paper) -> Document {
        let authors: Vec<String> = data
            .authors
            .iter()
            .filter_map(|a| a.name.clone())
            .collect();

        let published_date = data
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let url = data.url.clone().unwrap_or_else(|| "#".to_string());

        let abstract_text = data
            .r#abstract
            .clone()
            .unwrap_or_else(|| "No abstract available".to_string());

        DocumentBuilder::new(
            data.paper_id.clone(),
            data.title.clone(),
            SourceType::SemanticScholar,
        )
        .authors(authors)
        .abstract_text(abstract_text)
        .pdf_url(url.clone())
        .source_url(url)
        .published_date(published_date)
        .build()
    }
}

#[async_trait]
impl Source for SemanticScholarSource {
    fn id(&self) -> &str {
        "semantic"
    }

    fn name(&self) -> &str {
        "Semantic Scholar"
    }

    async fn search(&self, expression: &str, limit: usize) -> Result<Vec<Document>, SourceError> {
        let url = format!(
            "{}/paper/search?query={}&limit={}&fields={}",
            self.base_url,
            urlencoding::encode(expression),
            limit,
            PAPER_FIELDS
        );

        let data = with_retry(api_retry_config(), || {
            let url = url.clone();
            async move {
                let response = self
                    .add_api_key_if_present(self.client.get(&url))
                    .send()
                    .await
                    .map_err(|e| {
                        SourceError::Network(format!("Failed to search Semantic Scholar: {}", e))
                    })?;

                if !response.status().is_success() {
                    return Err(SourceError::Api(format!(
                        "Semantic Scholar API returned status: {}",
                        response.status()
                    )));
                }

                response
                    .json::<S2SearchResponse>()
                    .await
                    .map_err(|e| SourceError::Parse(format!("Failed to parse JSON: {}", e)))
            }
        })
        .await?;

        Ok(data
            .data
            .unwrap_or_default()
            .iter()
            .map(Self::parse_paper)
            .collect())
    }
}

// ===== Semantic Scholar API Types =====

#[derive(Debug, Deserialize)]
struct S2Paper {
    #[serde(rename = "paperId")]
    paper_id: String,
    title: String,
    r#abstract: Option<String>,
    year: Option<i32>,
    url: Option<String>,
    #[serde(default)]
    authors: Vec<S2Author>,
}

#[derive(Debug, Deserialize)]
struct S2Author {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct S2SearchResponse {
    // The endpoint omits "data" entirely when there are no hits
    data: Option<Vec<S2Paper>>,
}
