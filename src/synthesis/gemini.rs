//! Gemini generative backend client.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::synthesis::{Generative, SynthesisError};
use crate::utils::HttpClient;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for the Gemini `generateContent` endpoint.
///
/// The API key is injected at construction; there is no in-code default.
#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<HttpClient>,
    base_url: String,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never log the key
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with the default model.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SynthesisError> {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a client for a specific model.
    pub fn with_model(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, SynthesisError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SynthesisError::MissingKey);
        }
        Ok(Self {
            client: Arc::new(HttpClient::new()),
            base_url: GEMINI_API_BASE.to_string(),
            api_key,
            model: model.into(),
        })
    }

    /// Override the base URL (for testing against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl Generative for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, SynthesisError> {
        let body = json!({
            "contents": [
                { "role": "user", "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self
            .client
            .post(&self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::Network(format!("Failed to read response: {}", e)))?;

        // Join all text parts of the first candidate; an empty candidate
        // list yields empty text, which the extractor's fallback handles.
        let text = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        Ok(text)
    }
}

// ===== Gemini API Types =====

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            GeminiClient::new(""),
            Err(SynthesisError::MissingKey)
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let client = GeminiClient::new("super-secret").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
    }

    #[tokio::test]
    async fn test_generate_extracts_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "part one"}, {"text": "part two"}]}}
            ]
        }"#;
        server
            .mock("POST", mockito::Matcher::Regex(".*generateContent.*".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = GeminiClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());
        let text = client.generate("hello").await.unwrap();
        assert_eq!(text, "part one\npart two");
    }

    #[tokio::test]
    async fn test_generate_no_candidates_yields_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", mockito::Matcher::Regex(".*generateContent.*".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let client = GeminiClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());
        let text = client.generate("hello").await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_generate_error_status_surfaces() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", mockito::Matcher::Regex(".*generateContent.*".to_string()))
            .with_status(429)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let client = GeminiClient::new("test-key")
            .unwrap()
            .with_base_url(server.url());
        let err = client.generate("hello").await.unwrap_err();
        match err {
            SynthesisError::Api { status, body } => {
                assert_eq!(status, 429);
                assert!(body.contains("quota"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
