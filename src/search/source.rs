//! Metadata source abstraction
//!
//! Defines the search contract consumed by the controller, its error type,
//! and the HTTP implementation.

use std::future::Future;

use thiserror::Error;

use super::suggestion::Suggestion;

mod http;

pub use http::HttpSearchClient;

/// Errors that can occur while calling the search contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The configured endpoint is not a usable URL
    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("API error: status {code}")]
    Api { code: u16 },

    /// The response body was not a valid search payload
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A searchable source of work metadata
///
/// Returns the suggestions in the order the source produced them. An empty
/// vector means the search succeeded but matched nothing.
pub trait MetadataSource: Send + 'static {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, SearchError>> + Send;
}
