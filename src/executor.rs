//! Federated fan-out across the two literature backends.

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::Document;
use crate::planner::QueryVariant;
use crate::sources::Source;

/// Result caps governing the fan-out.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Primary backend stops issuing variants once this many documents have
    /// accumulated
    pub accumulate_target: usize,
    /// Final cap on the primary backend's sorted output
    pub primary_cap: usize,
    /// Per-variant result limit passed to the primary backend
    pub variant_limit: usize,
    /// Fixed request limit for the secondary backend's single call
    pub graph_limit: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            accumulate_target: 8,
            primary_cap: 6,
            variant_limit: 10,
            graph_limit: 5,
        }
    }
}

/// Executes planned variants against the primary backend and one fixed query
/// against the secondary backend, isolating failures on both paths.
///
/// The two backends run as concurrent tasks and are both awaited before the
/// caller merges; neither blocks the other. A backend that fails outright
/// contributes zero documents but never fails the fan-out.
#[derive(Debug, Clone)]
pub struct FederatedSearchExecutor {
    primary: Arc<dyn Source>,
    secondary: Arc<dyn Source>,
    limits: SearchLimits,
}

impl FederatedSearchExecutor {
    pub fn new(primary: Arc<dyn Source>, secondary: Arc<dyn Source>, limits: SearchLimits) -> Self {
        Self {
            primary,
            secondary,
            limits,
        }
    }

    /// Run both backends and return (primary documents, secondary documents),
    /// each already capped per [`SearchLimits`].
    pub async fn execute(
        &self,
        variants: &[QueryVariant],
        raw_query: &str,
    ) -> (Vec<Document>, Vec<Document>) {
        tokio::join!(
            self.collect_primary(variants),
            self.collect_secondary(raw_query)
        )
    }

    /// Sequential variant loop with early stop.
    ///
    /// Variants are issued in priority order; after each call, newly returned
    /// documents are deduplicated by id against everything already
    /// accumulated (first seen wins), then the loop breaks once the
    /// accumulation target is reached. A failed variant contributes nothing
    /// and the loop continues with the next one.
    async fn collect_primary(&self, variants: &[QueryVariant]) -> Vec<Document> {
        let mut accumulated: Vec<Document> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for variant in variants {
            match self
                .primary
                .search(&variant.expression, self.limits.variant_limit)
                .await
            {
                Ok(documents) => {
                    for doc in documents {
                        if doc.id.is_empty() {
                            continue;
                        }
                        if seen_ids.insert(doc.id.clone()) {
                            accumulated.push(doc);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        source = self.primary.id(),
                        priority = variant.priority,
                        "variant search failed: {}",
                        e
                    );
                }
            }

            if accumulated.len() >= self.limits.accumulate_target {
                tracing::debug!(
                    count = accumulated.len(),
                    "accumulation target reached, stopping variant loop"
                );
                break;
            }
        }

        // Newest first; the sort is stable so ties and undated documents
        // keep their discovery order.
        accumulated.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        accumulated.truncate(self.limits.primary_cap);
        accumulated
    }

    /// One fixed call against the secondary backend, independent of the
    /// primary loop's progress. Results stay unsorted.
    async fn collect_secondary(&self, raw_query: &str) -> Vec<Document> {
        match self
            .secondary
            .search(raw_query, self.limits.graph_limit)
            .await
        {
            Ok(mut documents) => {
                documents.truncate(self.limits.graph_limit);
                documents
            }
            Err(e) => {
                tracing::warn!(source = self.secondary.id(), "search failed: {}", e);
                Vec::new()
            }
        }
    }
}
