use serde::{Deserialize, Serialize};
use std::fmt;

/// Release channel suffix of a `major.minor.patch-channel` version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Stable,
    Lts,
    Legacy,
    Experimental,
    /// Any other suffix, kept verbatim
    Other(String),
}

impl Channel {
    /// Exact, case-sensitive match on the channel name
    pub fn parse(name: &str) -> Self {
        match name {
            "stable" => Channel::Stable,
            "lts" => Channel::Lts,
            "legacy" => Channel::Legacy,
            "experimental" => Channel::Experimental,
            other => Channel::Other(other.to_string()),
        }
    }

    /// Multiplier applied to the version weight
    pub const fn multiplier(&self) -> f64 {
        match self {
            Channel::Stable | Channel::Lts => 1.0,
            Channel::Legacy => 0.8,
            Channel::Experimental => 0.6,
            Channel::Other(_) => 0.75,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Channel::Stable => "stable",
            Channel::Lts => "lts",
            Channel::Legacy => "legacy",
            Channel::Experimental => "experimental",
            Channel::Other(name) => name,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain `major.minor.patch` version with an optional `-channel` suffix,
/// as found on dependency graph nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub channel: Channel,
}

impl ChannelVersion {
    pub const fn new(major: u64, minor: u64, patch: u64, channel: Channel) -> Self {
        Self {
            major,
            minor,
            patch,
            channel,
        }
    }

    /// Parse `"1.2.3"` or `"1.2.3-experimental"`.
    ///
    /// Never fails: missing or non-numeric segments read as 0 and a missing
    /// suffix means stable.
    pub fn parse(input: &str) -> Self {
        let (numbers, channel) = match input.split_once('-') {
            Some((numbers, channel)) => (numbers, Channel::parse(channel)),
            None => (input, Channel::Stable),
        };

        let mut segments = numbers
            .split('.')
            .map(|segment| segment.parse::<u64>().unwrap_or(0));
        let major = segments.next().unwrap_or(0);
        let minor = segments.next().unwrap_or(0);
        let patch = segments.next().unwrap_or(0);

        Self::new(major, minor, patch, channel)
    }

    /// Numeric triple used for tie-breaking
    pub const fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Weight in [0.0, 1.0) that grows with the version number and is
    /// scaled by the channel multiplier
    #[allow(clippy::cast_precision_loss)]
    pub fn semver_weight(&self) -> f64 {
        let base = self.major as f64 * 100.0 + self.minor as f64 * 10.0 + self.patch as f64;
        let compressed = (base / (base + 100.0)).min(1.0);
        compressed * self.channel.multiplier()
    }
}

impl fmt::Display for ChannelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}-{}", self.major, self.minor, self.patch, self.channel)
    }
}
