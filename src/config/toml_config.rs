use crate::core::templates::TemplateKind;
use crate::core::{StalePolicy, WidgetSpec};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetsConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub fixture: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub stale_policy: Option<StalePolicy>,
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub name: String,
    pub field_selector: String,
    pub table_selector: String,
    pub endpoint: String,
    pub template: TemplateKind,
}

impl WidgetConfig {
    pub fn spec(&self) -> WidgetSpec {
        WidgetSpec {
            name: self.name.clone(),
            field_selector: self.field_selector.clone(),
            table_selector: self.table_selector.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl WidgetsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SearchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SearchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BEER_SAMPLE_URL})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| SearchError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Widget by name; configured widgets shadow the presets.
    pub fn widget(&self, name: &str) -> Option<(WidgetSpec, TemplateKind)> {
        self.widgets
            .iter()
            .find(|w| w.name == name)
            .map(|w| (w.spec(), w.template))
            .or_else(|| crate::core::widgets::preset(name))
    }
}

impl Validate for WidgetsConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.backend.base_url {
            validation::validate_url("backend.base_url", base_url)?;
        }

        if let Some(timeout) = self.backend.timeout_seconds {
            validation::validate_positive_number("backend.timeout_seconds", timeout, 1)?;
        }

        for widget in &self.widgets {
            validation::validate_non_empty_string("widgets.name", &widget.name)?;
            validation::validate_selector("widgets.field_selector", &widget.field_selector)?;
            validation::validate_selector("widgets.table_selector", &widget.table_selector)?;
            validation::validate_endpoint("widgets.endpoint", &widget.endpoint)?;
        }

        Ok(())
    }
}
