use crate::domain::error::AppError;
use crate::domain::model::{ProviderKind, AUTO_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    pub http_proxy: Option<String>,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub providers: Providers,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Providers {
    #[serde(default)]
    pub openai: ProviderConfig,
    #[serde(default)]
    pub qwen: ProviderConfig,
    #[serde(default)]
    pub deepl: ProviderConfig,
    #[serde(default)]
    pub google: ProviderConfig,
}

/// Per-provider overrides. Unset fields use the adapter's built-in value.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_enable")]
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Logging {
    /// `EnvFilter` directive for the configured level; unknown values mean warn.
    pub fn filter_level(&self) -> &'static str {
        match self.level.to_uppercase().as_str() {
            "TRACE" => "trace",
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            "ERROR" => "error",
            _ => "warn",
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: None,
            model: None,
            timeout_secs: None,
        }
    }
}

impl ProviderConfig {
    pub fn endpoint_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(default)
    }

    pub fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default)
    }

    pub fn timeout_or(&self, default: Duration) -> Duration {
        self.timeout_secs
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
            .unwrap_or(default)
    }
}

impl Providers {
    pub fn get(&self, kind: ProviderKind) -> &ProviderConfig {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Qwen => &self.qwen,
            ProviderKind::DeepL => &self.deepl,
            ProviderKind::Google => &self.google,
        }
    }

    /// Enabled providers in declaration order.
    pub fn enabled(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|k| self.get(*k).enabled)
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            http_proxy: None,
            logging: Logging::default(),
            providers: Providers::default(),
        }
    }
}

// Defaults
fn default_source_language() -> String {
    AUTO_LANGUAGE.to_string()
}
fn default_target_language() -> String {
    "chinese".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("polyglot").join("config.toml"))
}

pub fn load_config() -> Result<Config, AppError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load from an explicit path. A missing file yields defaults; so does an
/// unparseable one, with a warning.
pub fn load_config_from(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn generate_config_sample() -> Result<(), AppError> {
    let path = get_config_path()
        .ok_or_else(|| AppError::Config("Cannot determine config directory".to_string()))?;

    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }
    Ok(())
}

/// Write the default config to `path`. Returns `false` if a file is already there.
pub fn write_config_sample(path: &Path) -> Result<bool, AppError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(true)
}
