use serde::{Deserialize, Serialize};

use crate::models::extended_version::ExtendedVersion;
use crate::models::state::State;
use crate::utils::error::{Result, SemverxError};

/// JSON report for a single extended version
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionReport {
    pub version: String,
    pub score: f64,
    pub weakest_state: State,
    pub components: Vec<ComponentReport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentReport {
    pub slot: String,
    pub value: i64,
    pub state: State,
    pub weight: f64,
}

impl VersionReport {
    pub fn new(version: &ExtendedVersion) -> Self {
        let components = ["major", "minor", "patch"]
            .iter()
            .zip(version.components())
            .map(|(slot, component)| ComponentReport {
                slot: (*slot).to_string(),
                value: component.value,
                state: component.state,
                weight: component.state.weight(),
            })
            .collect();

        Self {
            version: version.to_string(),
            score: version.coherence_score(),
            weakest_state: version.weakest_state(),
            components,
        }
    }

    /// Print as pretty JSON or as human-readable lines
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", to_json(self)?);
        } else {
            println!("Version: {}", self.version);
            println!("Coherence score: {}", self.score);
            if self.weakest_state != State::Stable {
                println!("Weakest component state: {}", self.weakest_state);
            }
        }
        Ok(())
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        SemverxError::Serialization(format!("Failed to serialize JSON response: {}", e))
    })
}
