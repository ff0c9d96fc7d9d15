use crate::core::widgets::{BEER_ENDPOINT, BREWERY_ENDPOINT};
use crate::core::{Result, SearchBackend, SearchResult};
use crate::utils::error::SearchError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

/// Results per lookup, same page size as the server.
pub const ENTRIES_PER_PAGE: usize = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct BeerEntry {
    pub id: String,
    pub name: String,
    pub brewery_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BreweryEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub beers: Vec<BeerEntry>,
    #[serde(default)]
    pub breweries: Vec<BreweryEntry>,
}

/// Offline backend over a JSON catalog.
///
/// Matches names by prefix in name order, like the server's `by_name` view
/// range query, and stops after [`ENTRIES_PER_PAGE`] hits.
#[derive(Debug, Clone)]
pub struct FixtureSearchBackend {
    catalog: Catalog,
}

impl FixtureSearchBackend {
    pub fn new(mut catalog: Catalog) -> Self {
        catalog.beers.sort_by(|a, b| a.name.cmp(&b.name));
        catalog.breweries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { catalog }
    }

    /// 從 JSON 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)?;
        tracing::debug!(
            "Loaded catalog with {} beers and {} breweries",
            catalog.beers.len(),
            catalog.breweries.len()
        );
        Ok(Self::new(catalog))
    }
}

#[async_trait]
impl SearchBackend for FixtureSearchBackend {
    async fn search(&self, endpoint: &str, value: &str) -> Result<Vec<SearchResult>> {
        let results = match endpoint {
            BEER_ENDPOINT => self
                .catalog
                .beers
                .iter()
                .filter(|b| b.name.starts_with(value))
                .take(ENTRIES_PER_PAGE)
                .map(|b| SearchResult::new(&b.id, &b.name).with_brewery(&b.brewery_id))
                .collect(),
            BREWERY_ENDPOINT => self
                .catalog
                .breweries
                .iter()
                .filter(|b| b.name.starts_with(value))
                .take(ENTRIES_PER_PAGE)
                .map(|b| SearchResult::new(&b.id, &b.name))
                .collect(),
            other => {
                return Err(SearchError::UnknownEndpointError {
                    endpoint: other.to_string(),
                })
            }
        };
        Ok(results)
    }
}
