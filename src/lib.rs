pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{FixtureSearchBackend, HttpSearchBackend};
pub use config::Settings;
pub use crate::core::live_search::{LiveSearch, Outcome};
pub use crate::core::templates::{BeerRowTemplate, BreweryRowTemplate, TemplateKind};
pub use domain::model::{Row, SearchField, SearchResult, StalePolicy, TableBody, WidgetSpec};
pub use utils::error::{Result, SearchError};
