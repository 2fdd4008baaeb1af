//! TOML-based configuration for edm-schema.
//!
//! Supports a config file (edm-schema.toml) with environment variable
//! expansion in path values.
//!
//! Example configuration:
//! ```toml
//! [resolver]
//! binding_policy = "reject"
//!
//! [metadata]
//! snapshot = "${EDM_SNAPSHOT}"
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::schema::{BindingPolicy, ModelOptions};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unterminated variable reference in: {0}")]
    UnterminatedVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Resolver behavior.
    pub resolver: ResolverSettings,

    /// Metadata snapshot location.
    pub metadata: MetadataSettings,

    /// Log output.
    pub logging: LoggingSettings,
}

/// Resolver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// What to do when an entity set binds to several entity types.
    pub binding_policy: BindingPolicy,
}

impl From<&ResolverSettings> for ModelOptions {
    fn from(settings: &ResolverSettings) -> Self {
        ModelOptions::default().with_binding_policy(settings.binding_policy)
    }
}

/// Metadata snapshot configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MetadataSettings {
    /// Path to a JSON metadata snapshot (supports ${ENV_VAR} expansion).
    pub snapshot: Option<String>,
}

impl MetadataSettings {
    /// The snapshot path with environment variables expanded.
    pub fn resolved_snapshot(&self) -> Result<Option<PathBuf>, SettingsError> {
        self.snapshot
            .as_deref()
            .map(|s| expand_env_vars(s).map(PathBuf::from))
            .transpose()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when neither `-v` nor `RUST_LOG` is given.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `EDM_SCHEMA_CONFIG`
    /// 2. `./edm-schema.toml`
    /// 3. `~/.config/edm-schema/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("EDM_SCHEMA_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("edm-schema.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("edm-schema").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Resolver options derived from these settings.
    pub fn model_options(&self) -> ModelOptions {
        ModelOptions::from(&self.resolver)
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. A lone `$` is kept.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let mut var_name = String::new();
        if chars.peek() == Some(&'{') {
            chars.next();
            let mut closed = false;
            for ch in chars.by_ref() {
                if ch == '}' {
                    closed = true;
                    break;
                }
                var_name.push(ch);
            }
            if !closed {
                return Err(SettingsError::UnterminatedVar(s.to_string()));
            }
        } else {
            while let Some(&ch) = chars.peek() {
                if !(ch.is_alphanumeric() || ch == '_') {
                    break;
                }
                var_name.push(ch);
                chars.next();
            }
            if var_name.is_empty() {
                result.push('$');
                continue;
            }
        }

        let value =
            env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
