//! Road network snapshots
//!
//! A snapshot is the on-disk form of a [`WeightedGraph`]: an optional list of
//! cities plus a list of roads. The file format is picked from the extension
//! (`.json`, `.yaml`/`.yml` or `.toml`).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadnetError};
use crate::graph::{Weight, WeightedGraph};

/// Source of a road network
pub trait GraphSource {
    fn load_graph(&self) -> Result<WeightedGraph>;
}

/// Single undirected road
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadRecord {
    pub from: String,
    pub to: String,
    pub km: Weight,
}

/// Cities and roads as stored in a snapshot document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadSnapshot {
    /// Cities without roads; cities named by a road need not be listed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cities: Vec<String>,
    #[serde(default)]
    pub roads: Vec<RoadRecord>,
}

impl RoadSnapshot {
    /// Five-city network around Buenos Aires
    pub fn sample() -> Self {
        let road = |from: &str, to: &str, km: Weight| RoadRecord {
            from: from.to_string(),
            to: to.to_string(),
            km,
        };
        RoadSnapshot {
            cities: Vec::new(),
            roads: vec![
                road("Buenos Aires", "Córdoba", 400),
                road("Buenos Aires", "Rosario", 300),
                road("Buenos Aires", "Mar del Plata", 400),
                road("Córdoba", "Mendoza", 400),
                road("Rosario", "Córdoba", 400),
            ],
        }
    }

    /// Snapshot of an existing graph; isolated cities go in `cities`
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        RoadSnapshot {
            cities: graph
                .vertices()
                .filter(|city| graph.neighbors(city).is_empty())
                .map(String::from)
                .collect(),
            roads: graph
                .edges()
                .map(|(from, to, km)| RoadRecord {
                    from: from.to_string(),
                    to: to.to_string(),
                    km,
                })
                .collect(),
        }
    }

    pub fn parse(content: &str, format: SnapshotFormat) -> Result<Self> {
        let snapshot = match format {
            SnapshotFormat::Json => serde_json::from_str(content)?,
            SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
            SnapshotFormat::Toml => toml::from_str(content)?,
        };
        Ok(snapshot)
    }

    pub fn render(&self, format: SnapshotFormat) -> Result<String> {
        let text = match format {
            SnapshotFormat::Json => serde_json::to_string_pretty(self)?,
            SnapshotFormat::Yaml => serde_yaml::to_string(self)?,
            SnapshotFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| RoadnetError::Other(format!("failed to serialize snapshot: {}", e)))?,
        };
        Ok(text)
    }
}

impl GraphSource for RoadSnapshot {
    fn load_graph(&self) -> Result<WeightedGraph> {
        let mut graph = WeightedGraph::new();
        for city in &self.cities {
            graph.add_vertex(city.as_str());
        }
        for road in &self.roads {
            graph.add_edge(road.from.as_str(), road.to.as_str(), road.km)?;
        }

        tracing::debug!(
            cities = graph.vertex_count(),
            roads = graph.edge_count(),
            "graph_built"
        );
        Ok(graph)
    }
}

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
    Toml,
}

impl SnapshotFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Ok(SnapshotFormat::Yaml),
            Some("toml") => Ok(SnapshotFormat::Toml),
            _ => Err(RoadnetError::UnknownFormat(format!(
                "{} (expected .json, .yaml, .yml or .toml)",
                path.display()
            ))),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotFormat::Json => write!(f, "json"),
            SnapshotFormat::Yaml => write!(f, "yaml"),
            SnapshotFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Snapshot stored on disk
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<RoadSnapshot> {
        let start = Instant::now();
        let format = SnapshotFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path)
            .map_err(|e| RoadnetError::io_operation("read snapshot", self.path.display(), e))?;
        let snapshot = RoadSnapshot::parse(&content, format)?;
        crate::trace_time!(start, "snapshot_parse", bytes = content.len());

        tracing::debug!(
            path = %self.path.display(),
            %format,
            roads = snapshot.roads.len(),
            "snapshot_read"
        );
        Ok(snapshot)
    }

    pub fn write(&self, snapshot: &RoadSnapshot) -> Result<()> {
        let format = SnapshotFormat::from_path(&self.path)?;
        let content = snapshot.render(format)?;
        fs::write(&self.path, content)
            .map_err(|e| RoadnetError::io_operation("write snapshot", self.path.display(), e))?;
        Ok(())
    }
}

impl GraphSource for SnapshotFile {
    fn load_graph(&self) -> Result<WeightedGraph> {
        self.read()?.load_graph()
    }
}
