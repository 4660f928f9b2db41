use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::component::{ComponentSpec, VersionComponent};
use crate::models::state::State;
use crate::services::parser;
use crate::utils::error::SemverxError;

/// Slot multipliers for major, minor and patch
const MAJOR_FACTOR: f64 = 3.0;
const MINOR_FACTOR: f64 = 1.5;
const PATCH_FACTOR: f64 = 0.5;

/// Score of an all-stable version, used to normalize into [0, 1]
const MAX_RAW_SCORE: f64 = MAJOR_FACTOR + MINOR_FACTOR + PATCH_FACTOR;

/// A semantic version whose major, minor and patch each carry a state
///
/// Renders as `<major>.<state>.<minor>.<state>.<patch>.<state>`, for example
/// `1.stable.4.experimental.2.stable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendedVersion {
    pub major: VersionComponent,
    pub minor: VersionComponent,
    pub patch: VersionComponent,
}

impl ExtendedVersion {
    /// Build a version from any of the accepted slot shapes
    ///
    /// ```
    /// use semverx::{ExtendedVersion, State, VersionComponent};
    ///
    /// let version = ExtendedVersion::new(1, (4, "exp"), VersionComponent::new(2, State::Legacy));
    /// assert_eq!(version.to_string(), "1.stable.4.experimental.2.legacy");
    /// ```
    pub fn new(
        major: impl Into<ComponentSpec>,
        minor: impl Into<ComponentSpec>,
        patch: impl Into<ComponentSpec>,
    ) -> Self {
        Self {
            major: major.into().normalize(),
            minor: minor.into().normalize(),
            patch: patch.into().normalize(),
        }
    }

    /// Components in major, minor, patch order
    pub const fn components(&self) -> [VersionComponent; 3] {
        [self.major, self.minor, self.patch]
    }

    /// Normalized, weighted stability summary in [0.0, 1.0], rounded to 3 places
    pub fn coherence_score(&self) -> f64 {
        let raw = self.major.state.weight() * MAJOR_FACTOR
            + self.minor.state.weight() * MINOR_FACTOR
            + self.patch.state.weight() * PATCH_FACTOR;

        round_to_thousandths(raw / MAX_RAW_SCORE)
    }

    /// Lowest state across all three components
    pub fn weakest_state(&self) -> State {
        self.components()
            .iter()
            .map(|component| component.state)
            .min()
            .unwrap_or_default()
    }

    /// Whether every component is stable
    pub fn is_fully_stable(&self) -> bool {
        self.weakest_state() == State::Stable
    }
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl fmt::Display for ExtendedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::str::FromStr for ExtendedVersion {
    type Err = SemverxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_canonical(s)
    }
}
