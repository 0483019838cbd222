use crate::context::DEFAULT_BRANCHES;
use crate::error::{CompventaError, Result};
use crate::model::UserRole;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for compventa, stored in config.json next to the data
/// fixtures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompventaConfig {
    /// Role assumed when no --role flag is given.
    #[serde(default = "default_role")]
    pub default_role: UserRole,

    /// Branch names offered in filters and on transaction submission.
    #[serde(default = "default_branches")]
    pub branches: Vec<String>,
}

fn default_role() -> UserRole {
    UserRole::Admin
}

fn default_branches() -> Vec<String> {
    DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect()
}

impl Default for CompventaConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            branches: default_branches(),
        }
    }
}

impl CompventaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CompventaError::Io)?;
        let config: CompventaConfig =
            serde_json::from_str(&content).map_err(CompventaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CompventaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CompventaError::Serialization)?;
        fs::write(config_path, content).map_err(CompventaError::Io)?;
        Ok(())
    }
}
