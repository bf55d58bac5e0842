//! Utility modules supporting search operations.
//!
//! - [`merge_documents`]: cross-backend merge with first-wins title dedup
//! - [`HttpClient`]: shared HTTP client with sensible defaults
//! - [`with_retry`]: bounded retry with exponential backoff for transient
//!   backend errors

mod dedup;
mod http;
mod retry;

pub use dedup::{merge_documents, title_key};
pub use http::HttpClient;
pub use retry::{api_retry_config, with_retry, RetryConfig};
