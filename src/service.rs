//! Request orchestration: plan, fan out, merge, synthesize, assemble.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::executor::{FederatedSearchExecutor, SearchLimits};
use crate::models::{DigestResult, Document, SearchResponse};
use crate::planner::plan;
use crate::sources::{ArxivSource, SemanticScholarSource, Source};
use crate::synthesis::{Generative, GeminiClient, SynthesisEngine, SynthesisError};
use crate::utils::merge_documents;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("Query is required")]
    EmptyQuery,

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// The research service: federated literature search plus an AI-synthesized
/// topic digest, degraded gracefully when individual backends misbehave.
#[derive(Debug, Clone)]
pub struct ResearchHub {
    executor: FederatedSearchExecutor,
    engine: SynthesisEngine,
}

impl ResearchHub {
    /// Wire the service from configuration. Fails only when the synthesis
    /// key is absent; literature backends need no credentials.
    pub fn from_config(config: &Config) -> Result<Self, SynthesisError> {
        let gemini_key = config
            .api_keys
            .gemini
            .clone()
            .ok_or(SynthesisError::MissingKey)?;
        let backend = GeminiClient::with_model(gemini_key, config.synthesis.model.clone())?;

        let primary: Arc<dyn Source> = Arc::new(ArxivSource::new());
        let secondary: Arc<dyn Source> = Arc::new(SemanticScholarSource::new(
            config.api_keys.semantic_scholar.clone(),
        ));

        Ok(Self::new(
            primary,
            secondary,
            Arc::new(backend),
            SearchLimits::from(&config.search),
        ))
    }

    /// Wire the service from explicit parts. Tests inject doubles here.
    pub fn new(
        primary: Arc<dyn Source>,
        secondary: Arc<dyn Source>,
        generative: Arc<dyn Generative>,
        limits: SearchLimits,
    ) -> Self {
        Self {
            executor: FederatedSearchExecutor::new(primary, secondary, limits),
            engine: SynthesisEngine::new(generative),
        }
    }

    /// Run a research query end to end and return the response envelope.
    ///
    /// Literature backend failures degrade toward fewer documents; only an
    /// empty query or an unreachable generative backend produce a failure
    /// envelope.
    pub async fn search(&self, query: &str, category: Option<&str>) -> SearchResponse {
        match self.run(query, category).await {
            Ok((digest, documents)) => {
                SearchResponse::ok(digest, documents, query, category.map(str::to_string))
            }
            Err(HubError::EmptyQuery) => SearchResponse::failure("Query is required", None),
            Err(HubError::Synthesis(e)) => {
                SearchResponse::failure("Failed to search", Some(e.to_string()))
            }
        }
    }

    async fn run(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<(DigestResult, Vec<Document>), HubError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(HubError::EmptyQuery);
        }

        let variants = plan(query);
        let (primary, secondary) = self.executor.execute(&variants, query).await;
        let documents = merge_documents(primary, secondary);
        info!(query, documents = documents.len(), "literature search complete");

        let digest = self.engine.digest(query, category).await?;
        Ok((digest, documents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceType;
    use crate::sources::mock::{make_document, MockSource};
    use crate::synthesis::testing::MockGenerative;

    fn digest_json() -> &'static str {
        r#"{"title": "Restaking", "summary": "A summary.", "confidence": "HIGH"}"#
    }

    fn hub(
        primary: MockSource,
        secondary: MockSource,
        generative: MockGenerative,
    ) -> ResearchHub {
        ResearchHub::new(
            Arc::new(primary),
            Arc::new(secondary),
            Arc::new(generative),
            SearchLimits::default(),
        )
    }

    #[tokio::test]
    async fn test_empty_query_fails_without_backend_calls() {
        let primary = MockSource::new();
        let generative = MockGenerative::returning(digest_json());
        let service = ResearchHub::new(
            Arc::new(primary),
            Arc::new(MockSource::new()),
            Arc::new(generative),
            SearchLimits::default(),
        );

        let response = service.search("   ", None).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Query is required"));
        assert!(response.digest.is_none());
    }

    #[tokio::test]
    async fn test_success_envelope_echoes_query_and_category() {
        let primary = MockSource::new();
        primary.respond(
            "all:restaking",
            vec![make_document("1", "Restaking Surveyed", SourceType::Arxiv)],
        );
        let service = hub(
            primary,
            MockSource::new(),
            MockGenerative::returning(digest_json()),
        );

        let response = service.search("restaking", Some("Staking")).await;
        assert!(response.success);
        assert_eq!(response.query.as_deref(), Some("restaking"));
        assert_eq!(response.category.as_deref(), Some("Staking"));
        let digest = response.digest.unwrap();
        assert_eq!(digest.title, "Restaking");
        assert_eq!(response.documents.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_all_literature_backends_down_still_succeeds() {
        let service = hub(
            MockSource::failing(),
            MockSource::failing(),
            MockGenerative::returning(digest_json()),
        );

        let response = service.search("restaking", None).await;
        assert!(response.success);
        assert_eq!(response.documents.unwrap().len(), 0);
        assert!(response.digest.is_some());
    }

    #[tokio::test]
    async fn test_synthesis_backend_down_fails_request() {
        let service = hub(MockSource::new(), MockSource::new(), MockGenerative::failing());

        let response = service.search("restaking", None).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Failed to search"));
        assert!(response.details.is_some());
    }
}
