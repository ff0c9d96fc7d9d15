use crate::domain::model::{Row, SearchResult, StalePolicy};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Answers `GET <endpoint>?value=<text>` with the decoded result array.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, endpoint: &str, value: &str) -> Result<Vec<SearchResult>>;
}

/// Turns one search result into table row markup.
pub trait RowTemplate: Send + Sync {
    fn render(&self, result: &SearchResult) -> Row;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn debounce(&self) -> Duration;
    fn stale_policy(&self) -> StalePolicy;
}

#[async_trait]
impl<B: SearchBackend + ?Sized> SearchBackend for std::sync::Arc<B> {
    async fn search(&self, endpoint: &str, value: &str) -> Result<Vec<SearchResult>> {
        (**self).search(endpoint, value).await
    }
}
