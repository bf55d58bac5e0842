//! Core data models for documents, digests, and response envelopes.

mod digest;
mod document;
mod response;

pub use digest::{Confidence, DigestResult};
pub use document::{truncate_abstract, Document, DocumentBuilder, SourceType, ABSTRACT_MAX_CHARS};
pub use response::SearchResponse;
