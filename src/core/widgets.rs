use crate::adapters::{FixtureSearchBackend, HttpSearchBackend};
use crate::config::Settings;
use crate::core::live_search::LiveSearch;
use crate::core::templates::{BeerRowTemplate, BreweryRowTemplate, TemplateKind};
use crate::core::{ConfigProvider, Result, SearchBackend, WidgetSpec};
use std::sync::Arc;

pub type DynLiveSearch = LiveSearch<Arc<dyn SearchBackend>, TemplateKind>;

pub const BEER_ENDPOINT: &str = "/beers/search";
pub const BREWERY_ENDPOINT: &str = "/breweries/search";

pub fn beer_spec() -> WidgetSpec {
    WidgetSpec {
        name: "beers".to_string(),
        field_selector: "#beer-search".to_string(),
        table_selector: "#beer-table".to_string(),
        endpoint: BEER_ENDPOINT.to_string(),
    }
}

pub fn brewery_spec() -> WidgetSpec {
    WidgetSpec {
        name: "breweries".to_string(),
        field_selector: "#brewery-search".to_string(),
        table_selector: "#brewery-table".to_string(),
        endpoint: BREWERY_ENDPOINT.to_string(),
    }
}

pub fn beer_search<B: SearchBackend>(backend: B) -> LiveSearch<B, BeerRowTemplate> {
    LiveSearch::new(beer_spec(), backend, BeerRowTemplate)
}

pub fn brewery_search<B: SearchBackend>(backend: B) -> LiveSearch<B, BreweryRowTemplate> {
    LiveSearch::new(brewery_spec(), backend, BreweryRowTemplate)
}

/// Spec and template of a preset widget, looked up by name.
pub fn preset(name: &str) -> Option<(WidgetSpec, TemplateKind)> {
    match name {
        "beers" | "beer" => Some((beer_spec(), TemplateKind::Beer)),
        "breweries" | "brewery" => Some((brewery_spec(), TemplateKind::Brewery)),
        _ => None,
    }
}

/// Builds the widget described by `settings`, backed by the fixture catalog
/// when one is configured and by the HTTP server otherwise.
pub fn from_settings(settings: &Settings) -> Result<DynLiveSearch> {
    let backend: Arc<dyn SearchBackend> = match &settings.fixture {
        Some(path) => {
            tracing::info!("📂 Using offline catalog: {}", path);
            Arc::new(FixtureSearchBackend::from_file(path)?)
        }
        None => {
            tracing::info!("🌐 Using search server: {}", settings.base_url());
            Arc::new(HttpSearchBackend::from_config(settings))
        }
    };

    Ok(LiveSearch::new(settings.widget.clone(), backend, settings.template)
        .with_stale_policy(settings.stale_policy())
        .with_debounce(settings.debounce()))
}
