//! Mock source for testing purposes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::{Document, DocumentBuilder, SourceType};
use crate::sources::{Source, SourceError};

/// A mock backend returning canned responses per query expression.
///
/// Records every expression it was asked, so tests can assert on the
/// executor's sequencing and early-stop behavior.
#[derive(Debug, Default)]
pub struct MockSource {
    responses: Mutex<HashMap<String, Vec<Document>>>,
    calls: Mutex<Vec<String>>,
    fail_all: bool,
}

impl MockSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every call fails with a network error.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Set the documents returned for a given expression. Expressions
    /// without a canned response return an empty list.
    pub fn respond(&self, expression: impl Into<String>, documents: Vec<Document>) {
        self.responses
            .lock()
            .unwrap()
            .insert(expression.into(), documents);
    }

    /// Expressions this source was queried with, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search(&self, expression: &str, _limit: usize) -> Result<Vec<Document>, SourceError> {
        self.calls.lock().unwrap().push(expression.to_string());

        if self.fail_all {
            return Err(SourceError::Network("mock backend down".to_string()));
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(expression)
            .cloned()
            .unwrap_or_default())
    }
}

/// Helper to create a document for tests.
pub fn make_document(id: &str, title: &str, source: SourceType) -> Document {
    DocumentBuilder::new(id, title, source)
        .source_url(format!("http://example.com/{}", id))
        .build()
}

/// Helper to create a document with a publication timestamp for tests.
pub fn make_dated_document(
    id: &str,
    title: &str,
    source: SourceType,
    at: chrono::DateTime<chrono::Utc>,
) -> Document {
    DocumentBuilder::new(id, title, source)
        .source_url(format!("http://example.com/{}", id))
        .published_date(at.format("%-m/%-d/%Y").to_string())
        .published_at(at)
        .build()
}
