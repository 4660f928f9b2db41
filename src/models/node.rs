use serde::{Deserialize, Serialize};

use crate::models::channel_version::ChannelVersion;

/// Consensus score used when a node has no votes
pub const NEUTRAL_CONSENSUS: f64 = 0.5;

const CONSENSUS_FACTOR: f64 = 0.50;
const ARTIFACT_FACTOR: f64 = 0.30;
const SEMVER_FACTOR: f64 = 0.20;

/// A single reviewer vote on a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Yes,
    No,
    Nil,
}

impl Vote {
    pub const fn value(self) -> f64 {
        match self {
            Vote::Yes => 1.0,
            Vote::Nil => 0.5,
            Vote::No => 0.0,
        }
    }
}

/// A candidate package version in a dependency graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the graph
    pub id: String,
    pub version: ChannelVersion,
    /// Confidence in the built artifact, expected in [0.0, 1.0]
    pub artifact_score: f64,
    pub votes: Vec<Vote>,
}

impl Node {
    pub fn new(id: impl Into<String>, version: ChannelVersion, artifact_score: f64, votes: Vec<Vote>) -> Self {
        Self {
            id: id.into(),
            version,
            artifact_score,
            votes,
        }
    }

    /// Mean vote value, or neutral when nobody voted
    #[allow(clippy::cast_precision_loss)]
    pub fn consensus_score(&self) -> f64 {
        if self.votes.is_empty() {
            return NEUTRAL_CONSENSUS;
        }
        let sum: f64 = self.votes.iter().map(|vote| vote.value()).sum();
        sum / self.votes.len() as f64
    }

    /// Blend of consensus, artifact confidence and version weight
    pub fn combined_score(&self) -> f64 {
        let consensus = self.consensus_score();
        let artifact = self.artifact_score.clamp(0.0, 1.0);
        let semver = self.version.semver_weight().clamp(0.0, 1.0);

        CONSENSUS_FACTOR * consensus + ARTIFACT_FACTOR * artifact + SEMVER_FACTOR * semver
    }
}
