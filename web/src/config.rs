use std::time::Duration;

use anyhow::{Context, ensure};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use tracing::Level;
use url::Url;

const DEFAULTS: &str = include_str!("../dashboard.toml");
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub storage_key: String,
    pub login_delay_ms: u64,
    pub alert_duration_ms: u64,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub log_level: String,
}

impl AppConfig {
    /// Built-in defaults, overlaid with `DASHBOARD_*` variables outside the browser.
    pub fn load() -> anyhow::Result<Self> {
        let builder = defaults();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.add_source(environment());

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let config: Self = builder
            .build()
            .and_then(|config| config.try_deserialize::<AppConfig>())
            .context("invalid dashboard configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(!self.storage_key.trim().is_empty(), "storage_key must not be empty");
        ensure!(self.page_size > 0, "page_size must be positive");
        ensure!(
            !self.page_size_options.is_empty() && !self.page_size_options.contains(&0),
            "page_size_options must be a non-empty list of positive sizes"
        );
        self.log_level()?;
        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }

    pub fn log_level(&self) -> anyhow::Result<Level> {
        self.log_level
            .parse()
            .with_context(|| format!("unknown log level {:?}", self.log_level))
    }
}

fn defaults() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml))
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("page_size_options")
}
