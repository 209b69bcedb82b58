use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

const DEFAULT_NOTIFICATION_SECS: u64 = 5;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// Treat a 2xx response as failed unless it carries `success: true`
    #[serde(default = "default_require_success_flag")]
    pub require_success_flag: bool,
    /// Request timeout; unset leaves the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ContactConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            require_success_flag: default_require_success_flag(),
            timeout_secs: None,
        }
    }
}

fn default_require_success_flag() -> bool {
    true
}

fn default_notification_secs() -> u64 {
    DEFAULT_NOTIFICATION_SECS
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub backend_url: String,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            backend_url: String::new(),
            contact: ContactConfig::default(),
            notification_secs: DEFAULT_NOTIFICATION_SECS,
            keybindings: keybindings::KeyBindings::default(),
            styles: styles::Styles::default(),
        }
    }
}

impl Config {
    /// Built-in configuration only, without user files or environment
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Layer user files from `config_dir` and `FOLIO_*` variables over the
    /// embedded defaults.
    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_override("data_dir", data_dir.to_string_lossy().to_string())?
            .set_override("config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using built-in defaults",
                config_dir.display()
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(utils::paths::PROJECT_NAME.as_str())
                .prefix_separator("_")
                .separator("__"),
        );

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // User keybindings replace single entries, never the whole map
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        if cfg.backend_url.trim().is_empty() {
            cfg.backend_url.clone_from(&default_config.backend_url);
        }

        Ok(cfg)
    }

    /// Apply command line overrides
    pub fn with_backend_url(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url.filter(|url| !url.trim().is_empty()) {
            self.backend_url = url;
        }
        self
    }
}
