use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::models::node::Node;

/// Scores closer than this are treated as equal and fall back to version order
pub const TIE_EPSILON: f64 = 1e-6;

/// Dependency graph of candidate nodes
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<String, Node>,
    /// Adjacency list: node id to child ids, in insertion order
    edges: HashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, replacing any previous node with the same id
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk from `start`, always descending into the best-scoring child, until
    /// a leaf, a node with no known children, or an already visited node.
    ///
    /// The start id is always the first entry, even when it is not a known node.
    pub fn resolve_best_path(&self, start: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut seen = HashSet::new();
        let mut current = start.to_string();

        while seen.insert(current.clone()) {
            path.push(current.clone());

            match self.best_child(&current) {
                Some(next) => {
                    trace!(from = %current, to = %next.id, "Descending into best child");
                    current = next.id.clone();
                }
                None => break,
            }
        }

        debug!(start, path = ?path, "Resolved best path");
        path
    }

    /// Highest `combined_score` among known children. Near-ties go to the
    /// higher (major, minor, patch); exact leftovers keep the earlier child.
    fn best_child(&self, id: &str) -> Option<&Node> {
        let mut best: Option<(&Node, f64)> = None;

        for child_id in self.children(id) {
            let Some(node) = self.nodes.get(child_id) else {
                continue;
            };
            let score = node.combined_score();

            best = match best {
                None => Some((node, score)),
                Some((_, best_score)) if score > best_score => Some((node, score)),
                Some((best_node, best_score))
                    if (score - best_score).abs() < TIE_EPSILON
                        && node.version.triple() > best_node.version.triple() =>
                {
                    Some((node, score))
                }
                keep => keep,
            };
        }

        best.map(|(node, _)| node)
    }
}
