use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::utils::error::SemverxError;

/// Maturity tag carried by each version component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Production-ready component
    #[default]
    Stable,
    /// Component still under active experimentation
    Experimental,
    /// Component kept only for compatibility
    Legacy,
}

impl State {
    /// Position in the hierarchy Legacy < Experimental < Stable
    pub const fn ordinal(self) -> u8 {
        match self {
            State::Legacy => 0,
            State::Experimental => 1,
            State::Stable => 2,
        }
    }

    /// Scoring weight used by the coherence score
    pub const fn weight(self) -> f64 {
        match self {
            State::Stable => 1.0,
            State::Experimental => 0.5,
            State::Legacy => 0.1,
        }
    }

    /// Lowercase name used in canonical version strings
    pub const fn as_str(self) -> &'static str {
        match self {
            State::Stable => "stable",
            State::Experimental => "experimental",
            State::Legacy => "legacy",
        }
    }

    /// Fuzzy-match a free-form state descriptor.
    ///
    /// The descriptor is trimmed and lowercased. Anything containing `exp` is
    /// Experimental, anything else containing `leg` is Legacy, and every other
    /// input (empty, misspelled, unrelated) falls back to Stable. This never
    /// fails: a typo such as `"experimnetal"` still matches, but `"bogus"`
    /// silently becomes Stable.
    pub fn from_descriptor(descriptor: &str) -> Self {
        let normalized = descriptor.trim().to_lowercase();

        if normalized.contains("exp") {
            State::Experimental
        } else if normalized.contains("leg") {
            State::Legacy
        } else {
            if !normalized.is_empty() && normalized != "stable" {
                tracing::warn!(
                    descriptor = %descriptor,
                    "Unrecognized state descriptor, defaulting to stable"
                );
            }
            State::Stable
        }
    }

    /// Returns all states from lowest to highest
    pub fn all() -> &'static [State] {
        &[State::Legacy, State::Experimental, State::Stable]
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for State {
    type Err = SemverxError;

    /// Strict parse: only the exact state names are accepted (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stable" => Ok(State::Stable),
            "experimental" => Ok(State::Experimental),
            "legacy" => Ok(State::Legacy),
            _ => Err(SemverxError::UnknownState(s.to_string())),
        }
    }
}
