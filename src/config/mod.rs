//! Configuration module for edm-schema.
//!
//! Handles the config file, environment variables, and settings.

mod settings;

pub use settings::{
    expand_env_vars, LoggingSettings, MetadataSettings, ResolverSettings, Settings, SettingsError,
};
