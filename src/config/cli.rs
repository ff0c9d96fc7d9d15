use crate::config::toml_config::WidgetsConfig;
use crate::config::Settings;
use crate::core::StalePolicy;
use crate::utils::error::{Result, SearchError};
use crate::utils::output::OutputFormat;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "beer-live-search")]
#[command(about = "Live search over the beer-sample beers and breweries tables")]
pub struct CliConfig {
    /// Base URL of the beer-sample server
    #[arg(long)]
    pub base_url: Option<String>,

    /// Widget to drive: beers, breweries, or one named in the config file
    #[arg(long, default_value = "beers")]
    pub widget: String,

    /// Simulate typing this text, one keystroke per char
    #[arg(long = "type")]
    pub type_text: Option<String>,

    /// Answer searches from a JSON catalog instead of the server
    #[arg(long)]
    pub fixture: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format of the final table: html, json or csv
    #[arg(long, default_value = "html")]
    pub format: String,

    /// overwrite or discard
    #[arg(long)]
    pub stale_policy: Option<String>,

    #[arg(long)]
    pub debounce_ms: Option<u64>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    /// 命令列參數優先於設定檔
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Some(WidgetsConfig::from_file(path)?)
            }
            None => None,
        };

        let mut settings = Settings::for_widget(&self.widget, file.as_ref())?;

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(fixture) = &self.fixture {
            settings.fixture = Some(fixture.clone());
        }
        if let Some(policy) = &self.stale_policy {
            settings.stale_policy = policy.parse::<StalePolicy>().map_err(|reason| {
                SearchError::InvalidConfigValueError {
                    field: "stale_policy".to_string(),
                    value: policy.clone(),
                    reason,
                }
            })?;
        }
        if let Some(ms) = self.debounce_ms {
            settings.debounce = Duration::from_millis(ms);
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout = Some(Duration::from_secs(secs));
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_defaults() {
        let cli = CliConfig::parse_from(["beer-live-search"]);
        assert_eq!(cli.widget, "beers");
        assert_eq!(cli.output_format().unwrap(), OutputFormat::Html);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.base_url(), crate::config::DEFAULT_BASE_URL);
        assert_eq!(settings.stale_policy(), StalePolicy::Discard);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[backend]\nbase_url = \"http://from-file:5000\"\ntimeout_seconds = 9\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "beer-live-search",
            "--widget",
            "breweries",
            "--config",
            &path,
            "--base-url",
            "http://from-flag:5000",
            "--stale-policy",
            "overwrite",
            "--debounce-ms",
            "25",
        ]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.base_url(), "http://from-flag:5000");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(9)));
        assert_eq!(settings.stale_policy(), StalePolicy::Overwrite);
        assert_eq!(settings.debounce(), Duration::from_millis(25));
        assert_eq!(settings.widget.endpoint, "/breweries/search");
    }

    #[test]
    fn test_bad_stale_policy() {
        let cli = CliConfig::parse_from(["beer-live-search", "--stale-policy", "newest"]);
        assert!(cli.settings().is_err());
    }
}
