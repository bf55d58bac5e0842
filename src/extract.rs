//! Resilient extraction of JSON objects from prose-wrapped model output.
//!
//! Generative backends promise a JSON contract but routinely wrap the object
//! in prose or fail the contract outright. Every call site that consumes
//! model output goes through [`extract_json_or`], so the attempt-strict-
//! parse-else-safe-default behavior is uniform and testable in one place.

use serde::de::DeserializeOwned;

/// Locate the span from the first `{` to the last `}` in `raw`, if any.
fn json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Parse the first-to-last-brace span of `raw` as `T`, or build the
/// call site's fallback.
///
/// On a successful parse the object is returned as parsed; fields the model
/// omitted land on their serde defaults and no further validation happens.
/// On any failure (no brace pair, unbalanced span, invalid JSON) the
/// fallback builder runs instead. This function never errors.
pub fn extract_json_or<T, F>(raw: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match json_span(raw).and_then(|span| serde_json::from_str::<T>(span).ok()) {
        Some(parsed) => parsed,
        None => {
            tracing::debug!("model output not parseable as JSON, using fallback");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Sample {
        title: String,
        count: u32,
    }

    fn fallback() -> Sample {
        Sample {
            title: "fallback".into(),
            count: 0,
        }
    }

    #[test]
    fn test_bare_object_parses() {
        let out: Sample = extract_json_or(r#"{"title":"X","count":2}"#, fallback);
        assert_eq!(out.title, "X");
        assert_eq!(out.count, 2);
    }

    #[test]
    fn test_prose_wrapped_object_parses() {
        let raw = r#"Sure! Here's the analysis: {"title":"X","count":1} Hope that helps!"#;
        let out: Sample = extract_json_or(raw, fallback);
        assert_eq!(out.title, "X");
        assert_eq!(out.count, 1);
    }

    #[test]
    fn test_no_braces_uses_fallback() {
        let out: Sample = extract_json_or("pure prose with no json at all", fallback);
        assert_eq!(out, fallback());
    }

    #[test]
    fn test_invalid_span_uses_fallback() {
        let out: Sample = extract_json_or("prefix { not json at all } suffix", fallback);
        assert_eq!(out, fallback());
    }

    #[test]
    fn test_reversed_braces_uses_fallback() {
        let out: Sample = extract_json_or("} backwards {", fallback);
        assert_eq!(out, fallback());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let out: Sample = extract_json_or(r#"{"title":"only title"}"#, fallback);
        assert_eq!(out.title, "only title");
        assert_eq!(out.count, 0);
    }

    #[test]
    fn test_nested_objects_span_to_last_brace() {
        let raw = r#"note {"title":"outer","count":3,"extra":{"inner":true}} tail"#;
        let out: Sample = extract_json_or(raw, fallback);
        assert_eq!(out.title, "outer");
    }
}
