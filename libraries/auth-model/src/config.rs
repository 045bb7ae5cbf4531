/// Codec configuration
use crate::error::Result;
use crate::naming::NamingConvention;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "auth-model.toml";

/// How absent fields appear in encoded output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NullPolicy {
    /// Keep the key with a `null` value
    #[default]
    Emit,
    /// Drop keys whose value is `null`
    Omit,
}

/// Settings for [`crate::ProfileCodec`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Whether absent fields are written as `null` or dropped
    #[serde(default)]
    pub null_policy: NullPolicy,

    /// Pretty-print encoded JSON
    #[serde(default)]
    pub pretty: bool,

    /// Convention every top-level key must follow
    #[serde(default)]
    pub naming: NamingConvention,
}

impl CodecConfig {
    /// Load configuration from `auth-model.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        Self::load_with(path.exists().then_some(path.as_path()))
    }

    /// Load configuration from an explicit file and environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(Some(path.as_ref()))
    }

    fn load_with(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            tracing::debug!("Loading codec config from {}", path.display());
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (prefixed with AUTH_MODEL_)
        settings = settings.add_source(
            config::Environment::with_prefix("AUTH_MODEL")
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            null_policy: NullPolicy::Emit,
            pretty: false,
            naming: NamingConvention::SnakeCase,
        }
    }
}
