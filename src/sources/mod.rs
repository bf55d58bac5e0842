//! Literature backend plugins.
//!
//! Each external backend implements the [`Source`] trait and maps its native
//! payload into the normalized [`Document`] shape. Backend failures are
//! represented as [`SourceError`]; the executor decides what to do with them
//! (swallow and degrade, never abort).

mod arxiv;
mod semantic;

pub mod mock;

pub use arxiv::ArxivSource;
pub use mock::MockSource;
pub use semantic::SemanticScholarSource;

use async_trait::async_trait;

use crate::models::Document;

/// Interface implemented by every literature backend.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (e.g. "arxiv", "semantic")
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Issue one query expression and return normalized documents.
    ///
    /// `limit` is the per-call result cap passed through to the backend.
    async fn search(&self, expression: &str, limit: usize) -> Result<Vec<Document>, SourceError>;
}

/// Errors raised while talking to a literature backend
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (Atom, JSON)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// API error from the backend
    #[error("API error: {0}")]
    Api(String),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
