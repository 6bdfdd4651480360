//! Configuration for grafo (stored in ~/.config/grafo/config.toml)

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GrafoError, Result};
use crate::graph::{DuplicateEdgePolicy, MstOptions, UnweightedPolicy, Weight};

pub use types::{GrafoConfig, GraphConfig, MstConfig, UnweightedMode};

const CONFIG_DIR: &str = "grafo";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAFO_CONFIG_DIR";

impl GrafoConfig {
    /// Location of the config file, honoring `GRAFO_CONFIG_DIR`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GrafoError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GrafoError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: GrafoConfig = toml::from_str(&content).map_err(|e| {
            GrafoError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty TOML, as written by `save_to`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GrafoError::Other(format!("failed to serialize config: {}", e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| GrafoError::Other("invalid config path".to_string()))?;
        fs::create_dir_all(config_dir)?;
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Reject settings the algorithms cannot use
    pub fn validate(&self) -> Result<()> {
        self.default_weight()?;
        if self.default_start.trim().is_empty() {
            crate::bail_invalid!("default_start", "(empty)");
        }
        Ok(())
    }

    pub fn duplicate_policy(&self) -> DuplicateEdgePolicy {
        self.graph.duplicate_edges
    }

    /// Weight counted for edges stored without one
    pub fn default_weight(&self) -> Result<Weight> {
        Weight::new(self.mst.default_weight)
    }

    /// Core MST options described by this config
    pub fn mst_options(&self) -> Result<MstOptions> {
        let unweighted = match self.mst.unweighted {
            UnweightedMode::Default => UnweightedPolicy::Default(self.default_weight()?),
            UnweightedMode::Reject => UnweightedPolicy::Reject,
        };
        Ok(MstOptions { unweighted })
    }

}
