//! Configuration for roadnet
//!
//! Configuration is read from `roadnet.toml`, either passed explicitly or
//! discovered in the working directory. Every field has a default, so a
//! missing file is not an error.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RoadnetError};

pub use types::{LimitsConfig, RoadnetConfig, SearchConfig, CONFIG_FILE};

impl RoadnetConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RoadnetError::io_operation("read config", path.display(), e))?;
        let mut config: RoadnetConfig = toml::from_str(&content)?;
        config.source_dir = path.parent().map(Path::to_path_buf);
        config.validate()?;

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoadnetError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| RoadnetError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Find `roadnet.toml` in `dir`, if present
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    }

    /// Load an explicit config, else a discovered one, else defaults
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(cwd) {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Path of the configured default snapshot, resolved against the config directory
    pub fn graph_path(&self) -> Option<PathBuf> {
        let graph = self.graph.as_ref()?;
        let path = PathBuf::from(graph);
        if path.is_absolute() {
            return Some(path);
        }
        Some(match &self.source_dir {
            Some(dir) => dir.join(path),
            None => path,
        })
    }

    /// Reject bounds that would make every search trivially empty
    pub fn validate(&self) -> Result<()> {
        if self.search.default_max_nodes == 0 {
            crate::bail_invalid!("search.default_max_nodes", 0);
        }
        if self.limits.max_tour_cities == 0 {
            crate::bail_invalid!("limits.max_tour_cities", 0);
        }
        if self.limits.max_cycle_nodes == 0 {
            crate::bail_invalid!("limits.max_cycle_nodes", 0);
        }
        Ok(())
    }
}
