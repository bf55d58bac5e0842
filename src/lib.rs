//! # Research Hub
//!
//! Federated literature search with AI-synthesized topic digests for Web3
//! research. One query fans out to arXiv and Semantic Scholar concurrently,
//! merges the results, and pairs them with a structured digest generated by
//! Gemini.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Document, DigestResult, SearchResponse)
//! - [`planner`]: Query variant planning for the literature repository
//! - [`sources`]: Literature backends behind the [`sources::Source`] trait
//! - [`executor`]: Concurrent fan-out with per-backend failure isolation
//! - [`synthesis`]: Generative backend client, prompts, and digest engine
//! - [`extract`]: Resilient JSON extraction from model output
//! - [`validator`] / [`vetting`]: Structured audit and vetting flows
//! - [`service`]: End-to-end request orchestration
//! - [`config`]: Configuration management
//! - [`utils`]: HTTP client, retry, and merge helpers

pub mod config;
pub mod executor;
pub mod extract;
pub mod models;
pub mod planner;
pub mod service;
pub mod sources;
pub mod synthesis;
pub mod utils;
pub mod validator;
pub mod vetting;

// Re-export commonly used types
pub use models::{DigestResult, Document, SearchResponse};
pub use service::{HubError, ResearchHub};
pub use sources::Source;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
