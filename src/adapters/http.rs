use crate::core::{ConfigProvider, Result, SearchBackend, SearchResult};
use crate::utils::error::SearchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Queries the beer-sample server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpSearchBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.base_url()).with_timeout(config.request_timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, endpoint: &str, value: &str) -> Result<Vec<SearchResult>> {
        let url = self.endpoint_url(endpoint);

        let mut request = self
            .client
            .get(&url)
            .query(&[("value", value)])
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making search request to: {}", url);
        let response = request.send().await?;
        tracing::debug!("Search response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SearchError::StatusError {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        let results: Vec<SearchResult> = serde_json::from_slice(&body)?;
        tracing::debug!("Decoded {} search results", results.len());

        Ok(results)
    }
}
