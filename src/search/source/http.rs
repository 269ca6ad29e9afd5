//! HTTP metadata search client
//!
//! Issues `GET {endpoint}?{query_param}={query}` and decodes the JSON body.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::ACCEPT;

use super::{MetadataSource, SearchError};
use crate::config::SearchConfig;
use crate::search::suggestion::{Suggestion, parse_payload};

/// Metadata search client backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: reqwest::Client,
    endpoint: Url,
    query_param: String,
}

impl HttpSearchClient {
    /// Create a client from the `[search]` config section
    ///
    /// Fails if the endpoint is not an absolute http(s) URL.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| SearchError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchError::InvalidEndpoint(format!(
                "{}: unsupported scheme",
                config.endpoint
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            query_param: config.query_param.clone(),
        })
    }

    /// Build the request URL for a query, URL-escaping it
    ///
    /// Query parameters already present on the endpoint are kept.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(&self.query_param, query);
        url
    }

    async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, SearchError> {
        let url = self.search_url(query);
        log::debug!("Metadata search GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Api {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        parse_payload(&body)
    }
}

impl MetadataSource for HttpSearchClient {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, SearchError>> + Send {
        self.fetch(query)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
