//! Layered configuration for the core library
//!
//! Priority, lowest to highest: defaults, TOML file, environment variables
//! prefixed with `CAPDIGEST_` (nested keys separated by `__`, e.g.
//! `CAPDIGEST_REGISTRY__VERIFY_DIGEST_LEN=false`).

use crate::Result;
use crate::tag::ImplTag;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default prefix of configuration environment variables
pub const DEFAULT_ENV_PREFIX: &str = "CAPDIGEST_";

/// Core library configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Built-in implementations to register; empty registers all of them
    pub enabled: Vec<ImplTag>,
    /// Check the written digest length in name-driven hashing
    pub verify_digest_len: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            enabled: Vec::new(),
            verify_digest_len: true,
        }
    }
}

/// Loads [`CoreConfig`] from its layered sources
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading defaults and environment only
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Also read the TOML file at `path` when it exists
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Configuration file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<CoreConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(CoreConfig::default()));

        // Layer 2: Config file (if exists)
        if let Some(path) = self.config_path.as_deref() {
            if path.exists() {
                debug!("Loading configuration from {}", path.display());
                figment = figment.merge(Toml::file(path));
            } else {
                debug!("Configuration file {} not found, skipping", path.display());
            }
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(&self.env_prefix).split("__"));

        let config: CoreConfig = figment.extract()?;
        debug!(
            "Configuration loaded: {} enabled implementations",
            config.registry.enabled.len()
        );
        Ok(config)
    }
}
