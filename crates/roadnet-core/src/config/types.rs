//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "roadnet.toml";

/// Top-level roadnet configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadnetConfig {
    /// Default road snapshot, relative to the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,

    /// Defaults for search parameters
    #[serde(default)]
    pub search: SearchConfig,

    /// Guards for the exponential searches
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Directory the config was loaded from
    #[serde(skip)]
    pub source_dir: Option<PathBuf>,
}

/// Defaults applied when a command omits a bound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Node bound for bounded paths and cycle enumeration (default 5)
    #[serde(default = "default_max_nodes")]
    pub default_max_nodes: usize,
}

/// Upper bounds enforced before running factorial / exponential searches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest city subset accepted by the exact tour solver (default 10)
    #[serde(default = "default_max_tour_cities")]
    pub max_tour_cities: usize,

    /// Largest node bound accepted by cycle enumeration (default 8)
    #[serde(default = "default_max_cycle_nodes")]
    pub max_cycle_nodes: usize,
}

fn default_max_nodes() -> usize {
    5
}

fn default_max_tour_cities() -> usize {
    10
}

fn default_max_cycle_nodes() -> usize {
    8
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_max_nodes: default_max_nodes(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            max_tour_cities: default_max_tour_cities(),
            max_cycle_nodes: default_max_cycle_nodes(),
        }
    }
}
