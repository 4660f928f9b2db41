use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::cli::report::to_json;
use crate::models::channel_version::ChannelVersion;
use crate::models::node::{Node, Vote};
use crate::services::resolver::Graph;
use crate::utils::config::{ConfigParser, GraphConfig};
use crate::utils::error::{Result, SemverxError};

/// Walk a dependency graph choosing the best-scoring child at each step
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Graph file describing [[node]] entries
    #[arg(required_unless_present = "demo", conflicts_with = "demo")]
    pub graph: Option<PathBuf>,

    /// Node to start from (default: the graph file's `start`)
    #[arg(long)]
    pub start: Option<String>,

    /// Resolve the built-in example graph instead of a file
    #[arg(long)]
    pub demo: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for resolve command
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub start: String,
    pub path: Vec<String>,
    pub nodes: Vec<NodeScore>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NodeScore {
    pub id: String,
    pub version: String,
    pub consensus: f64,
    pub artifact: f64,
    pub semver: f64,
    pub combined: f64,
}

impl NodeScore {
    fn new(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            version: node.version.to_string(),
            consensus: node.consensus_score(),
            artifact: node.artifact_score,
            semver: node.version.semver_weight(),
            combined: node.combined_score(),
        }
    }
}

impl ResolveCommand {
    pub fn execute(&self) -> Result<()> {
        let config = match &self.graph {
            Some(path) if !self.demo => ConfigParser::load_graph(path)?,
            _ => GraphConfig {
                start: Some(DEMO_START.to_string()),
                graph: demo_graph(),
            },
        };

        let start = self
            .start
            .clone()
            .or(config.start)
            .ok_or_else(|| SemverxError::Config("No start node given (use --start)".to_string()))?;

        if !config.graph.contains(&start) {
            return Err(SemverxError::UnknownNode(start));
        }

        let response = resolve(&config.graph, &start);
        info!(start = %start, steps = response.path.len(), "Resolved dependency path");

        if self.json {
            println!("{}", to_json(&response)?);
        } else {
            print_resolution(&response);
        }

        Ok(())
    }
}

/// Resolve from `start` and collect per-node scores along the path
pub fn resolve(graph: &Graph, start: &str) -> ResolveResponse {
    let path = graph.resolve_best_path(start);
    let nodes = path
        .iter()
        .filter_map(|id| graph.node(id))
        .map(NodeScore::new)
        .collect();

    ResolveResponse {
        start: start.to_string(),
        path,
        nodes,
    }
}

pub fn print_resolution(response: &ResolveResponse) {
    println!("Resolved path: {}", response.path.join(" -> "));
    for node in &response.nodes {
        println!(
            "Node {} ({}) -> consensus: {:.3}, artifact: {:.3}, semver: {:.3}, combined: {:.3}",
            node.id, node.version, node.consensus, node.artifact, node.semver, node.combined
        );
    }
}

pub const DEMO_START: &str = "A";

/// Small example graph: a stable and an experimental branch under `A`
pub fn demo_graph() -> Graph {
    let mut graph = Graph::new();

    graph.add_node(Node::new(
        "A",
        ChannelVersion::parse("1.0.0-stable"),
        0.95,
        vec![Vote::Yes, Vote::Yes, Vote::Nil],
    ));
    graph.add_node(Node::new(
        "B1",
        ChannelVersion::parse("2.0.0-stable"),
        0.9,
        vec![Vote::Yes, Vote::Yes, Vote::Yes, Vote::No],
    ));
    // older and more experimental
    graph.add_node(Node::new(
        "B2",
        ChannelVersion::parse("1.5.2-experimental"),
        0.7,
        vec![Vote::Yes, Vote::Nil, Vote::No, Vote::No],
    ));
    graph.add_node(Node::new(
        "C1",
        ChannelVersion::parse("3.0.0-stable"),
        0.92,
        vec![Vote::Yes, Vote::Yes],
    ));
    graph.add_node(Node::new(
        "C2",
        ChannelVersion::parse("2.9.9-legacy"),
        0.85,
        vec![Vote::Yes, Vote::Nil],
    ));

    graph.add_edge("A", "B1");
    graph.add_edge("A", "B2");
    graph.add_edge("B1", "C1");
    graph.add_edge("B2", "C2");

    graph
}
