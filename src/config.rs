//! Application configuration.
//!
//! Loads settings from config.json at startup. Provides the initial reference
//! monitor, window size and starting view modes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::monitor::{catalog, AspectRatio, MonitorKey, DEFAULT_REFERENCE};

/// Global configuration instance, initialized once at startup.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Reference monitor as written in config.json.
///
/// Missing fields take the 32" 16:9 defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Diagonal in inches, e.g. 27 or 21.5
    pub size: f64,
    /// Aspect ratio as "W:H"
    pub ratio: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            size: 32.0,
            ratio: "16:9".to_string(),
        }
    }
}

impl ReferenceConfig {
    /// Resolves to a catalog key, failing if the ratio is malformed or the
    /// monitor is not in the catalog.
    pub fn resolve(&self) -> Result<MonitorKey> {
        let ratio: AspectRatio = self.ratio.parse()?;
        let key = MonitorKey::from_inches(self.size, ratio);
        catalog::lookup(key)?;
        Ok(key)
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Monitor selected as the reference on startup
    #[serde(default)]
    pub reference: ReferenceConfig,
    /// Initial window inner width
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    /// Initial window inner height
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Start in fullscreen
    #[serde(default)]
    pub start_fullscreen: bool,
    /// Start with the control panel hidden
    #[serde(default)]
    pub start_immersive: bool,
}

fn default_window_width() -> f32 {
    1200.0
}

fn default_window_height() -> f32 {
    800.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceConfig::default(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            start_fullscreen: false,
            start_immersive: false,
        }
    }
}

impl AppConfig {
    /// Reference monitor key; falls back to 32" 16:9 if the configured one is unusable.
    pub fn reference_key(&self) -> MonitorKey {
        match self.reference.resolve() {
            Ok(key) => key,
            Err(e) => {
                crate::log(&format!(
                    "Configured reference monitor is invalid: {}. Using {}.",
                    e, DEFAULT_REFERENCE
                ));
                DEFAULT_REFERENCE
            }
        }
    }
}

/// Reads and parses a config file.
pub fn read_config(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Loads configuration from `path` or returns defaults.
fn load_config(path: &Path) -> AppConfig {
    crate::log(&format!("Looking for config at: {}", path.display()));

    if !path.exists() {
        crate::log("config.json not found. Using default config.");
        return AppConfig::default();
    }

    match read_config(path) {
        Ok(config) => {
            crate::log("Config loaded from config.json");
            config
        }
        Err(e) => {
            crate::log(&format!("{:#}. Using defaults.", e));
            AppConfig::default()
        }
    }
}

/// Initializes the global configuration. Call once at startup.
pub fn init_config() {
    let _ = CONFIG.set(load_config(&crate::paths::get_config_path()));
}

/// Returns a reference to the global configuration.
/// Falls back to defaults if called before init_config().
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
