//! Cross-source merge and deduplication of documents.

use std::collections::HashSet;

use crate::models::Document;

/// Title key used for duplicate detection: runs of whitespace collapse to a
/// single space, everything else compares exactly (case and punctuation
/// preserved).
pub fn title_key(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Merge the primary backend's documents with the secondary backend's,
/// dropping later duplicates by title.
///
/// The primary list comes first and its ordering is authoritative; secondary
/// entries trail and are only kept when their title was not seen before.
/// No re-sort and no further capping happen here.
pub fn merge_documents(primary: Vec<Document>, secondary: Vec<Document>) -> Vec<Document> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(primary.len() + secondary.len());

    for doc in primary.into_iter().chain(secondary) {
        if seen.insert(title_key(&doc.title)) {
            merged.push(doc);
        }
    }

    merged
}
