//! Query planning: expanding raw query text into ordered backend variants.

use serde::{Deserialize, Serialize};

/// Boolean join token used between query terms.
const AND: &str = " AND ";

/// arXiv category codes scoped into the fixed category variants.
const CATEGORY_SCOPES: [&str; 3] = [
    "cs.CR", // security / cryptography
    "cs.DC", // distributed computing
    "cs.AI", // artificial intelligence
];

/// A single backend-specific query variant.
///
/// Variants are emitted most-specific-first; `priority` is the position in
/// that order and drives the executor's sequential early-stop loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVariant {
    /// Formatted field-scoped boolean expression, e.g. `ti:defi AND yield`
    pub expression: String,

    /// Execution rank, zero is first
    pub priority: usize,
}

/// Normalize a raw query into AND-joined search terms.
///
/// Strips non-alphanumeric characters (whitespace survives), splits on
/// whitespace, and discards tokens of length <= 2. A query with no
/// surviving token yields an empty string; callers reject empty raw
/// queries before planning, so that case only arises for degenerate
/// all-short-token input.
pub fn normalize_terms(query: &str) -> String {
    query
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .filter(|token| token.len() > 2)
        .collect::<Vec<_>>()
        .join(AND)
}

/// Expand a raw query into the ordered variant list.
///
/// Emits, in priority order: broad full-text match, title-only match,
/// abstract-only match, then the three fixed category-scoped matches.
pub fn plan(query: &str) -> Vec<QueryVariant> {
    let terms = normalize_terms(query);

    let mut expressions = vec![
        format!("all:{terms}"),
        format!("ti:{terms}"),
        format!("abs:{terms}"),
    ];
    for cat in CATEGORY_SCOPES {
        expressions.push(format!("cat:{cat}{AND}all:{terms}"));
    }

    expressions
        .into_iter()
        .enumerate()
        .map(|(priority, expression)| QueryVariant {
            expression,
            priority,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_short_tokens() {
        let terms = normalize_terms("DeFi yield-farming, on L2!");
        // "on" and "L2" (yields "L2" -> len 2) are dropped; hyphen removed
        assert_eq!(terms, "DeFi AND yieldfarming");
    }

    #[test]
    fn test_normalize_all_short_tokens_is_empty() {
        assert_eq!(normalize_terms("a be c!"), "");
    }

    #[test]
    fn test_plan_emits_fixed_priority_order() {
        let variants = plan("DeFi yield farming protocols");
        assert_eq!(variants.len(), 6);

        assert!(variants[0].expression.starts_with("all:"));
        assert!(variants[1].expression.starts_with("ti:"));
        assert!(variants[2].expression.starts_with("abs:"));
        assert!(variants[3].expression.starts_with("cat:cs.CR"));
        assert!(variants[4].expression.starts_with("cat:cs.DC"));
        assert!(variants[5].expression.starts_with("cat:cs.AI"));

        for (i, v) in variants.iter().enumerate() {
            assert_eq!(v.priority, i);
        }
    }

    #[test]
    fn test_plan_no_short_tokens_in_clauses() {
        let variants = plan("ai ml zk proofs for the web");
        for variant in &variants {
            let clause = variant
                .expression
                .rsplit_once(':')
                .map(|(_, c)| c)
                .unwrap_or("");
            for token in clause.split(AND) {
                assert!(
                    token.is_empty() || token.len() > 2,
                    "short token {token:?} leaked into {}",
                    variant.expression
                );
            }
        }
    }

    #[test]
    fn test_plan_degenerate_query_keeps_empty_clauses() {
        let variants = plan("a b");
        assert_eq!(variants[0].expression, "all:");
        assert_eq!(variants[3].expression, "cat:cs.CR AND all:");
    }

    #[test]
    fn test_category_variants_keep_full_text_clause() {
        let variants = plan("consensus protocols");
        assert_eq!(
            variants[3].expression,
            "cat:cs.CR AND all:consensus AND protocols"
        );
    }
}
