use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{FitThresholds, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_length_weight")]
    pub length: f64,
    #[serde(default = "default_width_weight")]
    pub width: f64,
    #[serde(default = "default_perimeter_weight")]
    pub perimeter: f64,
    #[serde(default = "default_area_weight")]
    pub area: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            length: default_length_weight(),
            width: default_width_weight(),
            perimeter: default_perimeter_weight(),
            area: default_area_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            length: config.length,
            width: config.width,
            perimeter: config.perimeter,
            area: config.area,
        }
    }
}

fn default_length_weight() -> f64 { 0.375 }
fn default_width_weight() -> f64 { 0.275 }
fn default_perimeter_weight() -> f64 { 0.225 }
fn default_area_weight() -> f64 { 0.125 }

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_excellent")]
    pub excellent: f64,
    #[serde(default = "default_good")]
    pub good: f64,
    #[serde(default = "default_fair")]
    pub fair: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            excellent: default_excellent(),
            good: default_good(),
            fair: default_fair(),
        }
    }
}

impl From<&ThresholdsConfig> for FitThresholds {
    fn from(config: &ThresholdsConfig) -> Self {
        Self {
            excellent: config.excellent,
            good: config.good,
            fair: config.fair,
        }
    }
}

fn default_excellent() -> f64 { 85.0 }
fn default_good() -> f64 { 65.0 }
fn default_fair() -> f64 { 45.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_shoes_path")]
    pub shoes_path: String,
    #[serde(default = "default_scans_path")]
    pub scans_path: String,
    pub limit: Option<usize>,
    #[serde(default)]
    pub include_inactive: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            shoes_path: default_shoes_path(),
            scans_path: default_scans_path(),
            limit: None,
            include_inactive: false,
        }
    }
}

fn default_shoes_path() -> String { "data/shoes.json".to_string() }
fn default_scans_path() -> String { "data/foot_scans.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// `LOG_LEVEL` and `LOG_FORMAT` take precedence over the layered settings
    pub fn with_env_overrides(self) -> Self {
        self.overridden_by(std::env::var("LOG_LEVEL").ok(), std::env::var("LOG_FORMAT").ok())
    }

    fn overridden_by(self, level: Option<String>, format: Option<String>) -> Self {
        Self {
            level: level.filter(|l| !l.is_empty()).unwrap_or(self.level),
            format: format.filter(|f| !f.is_empty()).unwrap_or(self.format),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SHOEFIT_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., SHOEFIT__SCORING__WEIGHTS__LENGTH -> scoring.weights.length
            .add_source(
                Environment::with_prefix("SHOEFIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_path_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SHOEFIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the short-form data path variables on top of the layered config
fn apply_path_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let shoes_path = env::var("SHOE_CATALOG_PATH").ok();
    let scans_path = env::var("FOOT_SCANS_PATH").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(path) = shoes_path {
        builder = builder.set_override("catalog.shoes_path", path)?;
    }
    if let Some(path) = scans_path {
        builder = builder.set_override("catalog.scans_path", path)?;
    }

    builder.build()
}
