#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::templates::TemplateKind;
use crate::core::{ConfigProvider, StalePolicy, WidgetSpec};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::WidgetsConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Effective settings for one widget run, after merging defaults, the TOML
/// file and command line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub debounce: Duration,
    pub stale_policy: StalePolicy,
    pub fixture: Option<String>,
    pub widget: WidgetSpec,
    pub template: TemplateKind,
}

impl Settings {
    pub fn for_widget(name: &str, file: Option<&WidgetsConfig>) -> Result<Self> {
        let fallback = WidgetsConfig::default();
        let file = file.unwrap_or(&fallback);

        let (widget, template) =
            file.widget(name)
                .ok_or_else(|| SearchError::InvalidConfigValueError {
                    field: "widget".to_string(),
                    value: name.to_string(),
                    reason: "Not a configured widget (try beers or breweries)".to_string(),
                })?;

        Ok(Self {
            base_url: file
                .backend
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: file.backend.timeout_seconds.map(Duration::from_secs),
            debounce: Duration::from_millis(file.search.debounce_ms.unwrap_or(0)),
            stale_policy: file.search.stale_policy.unwrap_or_default(),
            fixture: file.backend.fixture.clone(),
            widget,
            template,
        })
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn debounce(&self) -> Duration {
        self.debounce
    }

    fn stale_policy(&self) -> StalePolicy {
        self.stale_policy
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if self.fixture.is_none() {
            validation::validate_url("base_url", &self.base_url)?;
        }
        if let Some(timeout) = self.timeout {
            validation::validate_positive_number("timeout_secs", timeout.as_secs(), 1)?;
        }
        validation::validate_selector("field_selector", &self.widget.field_selector)?;
        validation::validate_selector("table_selector", &self.widget.table_selector)?;
        validation::validate_endpoint("endpoint", &self.widget.endpoint)?;
        Ok(())
    }
}
