//! Handler-layer configuration.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. Variables
//! prefixed with `BACTL_` override YAML values, so `BACTL_TEMP_DIR=/scratch` pins the scratch
//! directory without touching the config file.
//!
//! The one knob today is `temp_dir`: when set, file payloads are materialized under that
//! directory instead of whatever the `TEMP` environment variable points at when the request
//! arrives.

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::temp_dir::{EnvTempDir, FixedTempDir, TempDirProvider};

/// Handler-layer configuration.
///
/// All fields default, so an absent config file yields a working setup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fixed scratch directory for materialized file payloads. When unset, the `TEMP`
    /// environment variable is consulted at request time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the given YAML file (if present) merged with
    /// `BACTL_`-prefixed environment variables.
    pub fn load(config_path: &str) -> Result<Self, figment::Error> {
        Self::figment(config_path).extract()
    }

    pub fn figment(config_path: &str) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(config_path))
            // Environment variables can still override specific values
            .merge(Env::prefixed("BACTL_"))
    }

    /// The temp-directory provider this configuration selects: the fixed override when set,
    /// otherwise the process environment.
    pub fn temp_dir_provider(&self) -> Box<dyn TempDirProvider> {
        match &self.temp_dir {
            Some(dir) => Box::new(FixedTempDir::new(dir.clone())),
            None => Box::new(EnvTempDir),
        }
    }
}
