use std::{
    fs::{read_to_string, write},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use crate::error::ZonalError;

/// Editor-level settings. `site` names the portal site whose navigation
/// tree page paths resolve against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_site")]
    pub site: String,
}

fn default_site() -> String {
    "classic".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            site: default_site(),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn get_config(&self) -> Result<EditorConfig, ZonalError>;
    fn set_config(&self, config: &EditorConfig) -> Result<(), ZonalError>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TomlConfigProvider {
    path: PathBuf,
}

impl TomlConfigProvider {
    pub fn new(path: PathBuf) -> Self {
        TomlConfigProvider { path }
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn get_config(&self) -> Result<EditorConfig, ZonalError> {
        tracing::debug!("Attempting to read editor config from: {:?}", &self.path);
        if !self.path.exists() {
            tracing::debug!("Config file not found, using defaults.");
            return Ok(EditorConfig::default());
        }
        let content = read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn set_config(&self, config: &EditorConfig) -> Result<(), ZonalError> {
        tracing::debug!("Attempting to write editor config to: {:?}", &self.path);
        let toml_string = toml::to_string(config)?;
        write(&self.path, toml_string)?;
        Ok(())
    }
}
