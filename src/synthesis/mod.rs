//! Topic digest synthesis via the generative backend.

mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use std::sync::Arc;

use crate::extract::extract_json_or;
use crate::models::DigestResult;

/// Errors raised while talking to the generative backend.
///
/// Unlike literature-backend errors these are request-fatal: the digest is
/// the primary payload, so an unreachable backend fails the whole request.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("Generative backend request failed: {0}")]
    Network(String),

    #[error("Generative backend returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Generative backend API key not configured")]
    MissingKey,
}

/// Text-generation seam. Production uses [`GeminiClient`]; tests inject
/// doubles.
#[async_trait]
pub trait Generative: Send + Sync + std::fmt::Debug {
    /// Send one prompt and return the raw response text, with no structural
    /// guarantee about its shape.
    async fn generate(&self, prompt: &str) -> Result<String, SynthesisError>;
}

/// Builds the fixed digest prompt, invokes the generative backend once per
/// request, and recovers from contract violations via the shared extractor.
#[derive(Debug, Clone)]
pub struct SynthesisEngine {
    backend: Arc<dyn Generative>,
}

impl SynthesisEngine {
    pub fn new(backend: Arc<dyn Generative>) -> Self {
        Self { backend }
    }

    /// Synthesize a digest for the query.
    ///
    /// A reachable backend always yields a digest: unparsable output falls
    /// back to the deterministic digest echoing the query. Only transport
    /// failures propagate.
    pub async fn digest(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<DigestResult, SynthesisError> {
        let prompt = prompt::digest_prompt(query, category);
        let raw = self.backend.generate(&prompt).await?;
        Ok(extract_json_or(&raw, || DigestResult::fallback(query, &raw)))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Generative double returning a fixed response or error.
    #[derive(Debug, Default)]
    pub struct MockGenerative {
        response: Mutex<Option<String>>,
        fail: bool,
        pub prompts: Mutex<Vec<String>>,
    }

    impl MockGenerative {
        pub fn returning(text: impl Into<String>) -> Self {
            Self {
                response: Mutex::new(Some(text.into())),
                fail: false,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl Generative for MockGenerative {
        async fn generate(&self, prompt: &str) -> Result<String, SynthesisError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(SynthesisError::Network("mock backend down".into()));
            }
            Ok(self
                .response
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_default())
        }
    }
}
