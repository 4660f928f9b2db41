// Manifest loading and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::{Table, Value};
use tracing::debug;

use crate::models::channel_version::ChannelVersion;
use crate::models::extended_version::ExtendedVersion;
use crate::models::node::{Node, Vote};
use crate::services::loose::component_spec_from_value;
use crate::services::resolver::Graph;
use crate::utils::error::{Result, SemverxError};

/// Default manifest file name, looked up in the current directory
pub const DEFAULT_MANIFEST: &str = "semverx.toml";

/// Manifest parsing utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load an extended version from a manifest file
    pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<ExtendedVersion> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SemverxError::Config(format!(
                "Manifest not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;

        debug!(path = %path.display(), "Loaded manifest");
        Self::parse_manifest(&content)
    }

    /// Parse a manifest from a TOML string
    ///
    /// ```toml
    /// [version]
    /// major = "1.stable"
    /// minor = [4, "experimental"]
    /// patch = { value = 2, state = "stable" }
    /// ```
    pub fn parse_manifest(content: &str) -> Result<ExtendedVersion> {
        let manifest: Table = toml::from_str(content)
            .map_err(|e| SemverxError::Config(format!("Invalid TOML syntax: {}", e)))?;

        let version = manifest
            .get("version")
            .and_then(Value::as_table)
            .ok_or_else(|| SemverxError::Config("Missing [version] table".to_string()))?;

        let major = component_spec_from_value(Self::slot(version, "major")?)?;
        let minor = component_spec_from_value(Self::slot(version, "minor")?)?;
        let patch = component_spec_from_value(Self::slot(version, "patch")?)?;

        Ok(ExtendedVersion::new(major, minor, patch))
    }

    /// Load a dependency graph description from a TOML file
    pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<GraphConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SemverxError::Config(format!(
                "Graph file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;

        debug!(path = %path.display(), "Loaded graph file");
        Self::parse_graph(&content)
    }

    /// Parse a dependency graph description
    ///
    /// ```toml
    /// start = "A"
    ///
    /// [[node]]
    /// id = "A"
    /// version = "1.0.0-stable"
    /// artifact_score = 0.95
    /// votes = ["yes", "yes", "nil"]
    /// depends_on = ["B1", "B2"]
    /// ```
    pub fn parse_graph(content: &str) -> Result<GraphConfig> {
        let graph_toml: GraphToml = toml::from_str(content)
            .map_err(|e| SemverxError::Config(format!("Invalid graph file: {}", e)))?;

        let mut graph = Graph::new();
        for node in graph_toml.nodes {
            for child in &node.depends_on {
                graph.add_edge(&node.id, child);
            }
            graph.add_node(Node::new(
                node.id,
                ChannelVersion::parse(&node.version),
                node.artifact_score,
                node.votes,
            ));
        }

        Ok(GraphConfig {
            start: graph_toml.start,
            graph,
        })
    }

    fn slot<'a>(version: &'a Table, name: &str) -> Result<&'a Value> {
        version.get(name).ok_or_else(|| {
            SemverxError::Config(format!("Missing '{}' in [version] table", name))
        })
    }
}

/// A loaded dependency graph and its optional default start node
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub start: Option<String>,
    pub graph: Graph,
}

/// On-disk graph file format
#[derive(Debug, Deserialize)]
struct GraphToml {
    start: Option<String>,
    #[serde(default, rename = "node")]
    nodes: Vec<NodeToml>,
}

#[derive(Debug, Deserialize)]
struct NodeToml {
    id: String,
    version: String,
    #[serde(default)]
    artifact_score: f64,
    #[serde(default)]
    votes: Vec<Vote>,
    #[serde(default)]
    depends_on: Vec<String>,
}

/// Path to the manifest in the current directory
pub fn get_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}
