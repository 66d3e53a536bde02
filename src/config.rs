use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::parameters::RawParameters;

/// Defaults for any parameter not given on the command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub project: Option<PathBuf>,
    #[serde(rename = "applicationName")]
    pub application_name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Config file does not exist or is not a file: {:?}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        // an empty document is valid and means "no defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config =
            serde_norway::from_str(&content).with_context(|| "Failed to parse YAML config")?;

        Ok(config)
    }
}

impl From<Config> for RawParameters {
    fn from(config: Config) -> Self {
        RawParameters {
            project: config.project,
            application_name: config.application_name,
            user: config.user,
            password: config.password,
        }
    }
}
