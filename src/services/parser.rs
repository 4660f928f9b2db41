// String parsing for extended versions

use tracing::{debug, trace};

use crate::models::component::{ComponentSpec, VersionComponent};
use crate::models::extended_version::ExtendedVersion;
use crate::models::state::State;
use crate::utils::error::{Result, SemverxError};

/// Descriptor assumed when a component string carries no state segment
pub const DEFAULT_DESCRIPTOR: &str = "stable";

/// Parse a single `"<int>[.<state-word>]"` component.
///
/// Only the first two dot-separated segments are considered; anything after
/// them is ignored. The state word goes through the lenient descriptor match,
/// so unknown words become stable rather than failing.
pub fn parse_component(input: &str) -> Result<VersionComponent> {
    let mut segments = input.split('.');
    let value_segment = segments.next().unwrap_or_default();
    let descriptor = segments.next().unwrap_or(DEFAULT_DESCRIPTOR);

    let value = parse_value(input, value_segment)?;
    trace!(input, value, descriptor, "Parsed component segments");

    Ok(ComponentSpec::from((value, descriptor)).normalize())
}

/// Build an extended version from three component strings such as
/// `"1.stable"`, `"4.experimental"` and `"2"`.
pub fn semver_version_extended(major: &str, minor: &str, patch: &str) -> Result<ExtendedVersion> {
    let version = ExtendedVersion::new(
        parse_component(major)?,
        parse_component(minor)?,
        parse_component(patch)?,
    );
    debug!(version = %version, "Parsed extended version");
    Ok(version)
}

/// Parse the six-segment canonical form produced by `ExtendedVersion`'s
/// `Display`, e.g. `1.stable.4.experimental.2.stable`.
///
/// Unlike component strings, state names here must be exact.
pub fn parse_canonical(input: &str) -> Result<ExtendedVersion> {
    let segments: Vec<&str> = input.trim().split('.').collect();
    if segments.len() != 6 {
        return Err(SemverxError::MalformedVersion(format!(
            "'{}' has {} segments, expected 6 (<major>.<state>.<minor>.<state>.<patch>.<state>)",
            input,
            segments.len()
        )));
    }

    let components = segments
        .chunks_exact(2)
        .map(|pair| {
            let value = parse_value(input, pair[0])?;
            let state: State = pair[1].parse()?;
            Ok(VersionComponent::new(value, state))
        })
        .collect::<Result<Vec<_>>>()?;

    match components.as_slice() {
        [major, minor, patch] => Ok(ExtendedVersion::new(*major, *minor, *patch)),
        _ => Err(SemverxError::MalformedVersion(input.to_string())),
    }
}

fn parse_value(input: &str, segment: &str) -> Result<i64> {
    segment.trim().parse::<i64>().map_err(|e| SemverxError::Parse {
        input: input.to_string(),
        reason: format!("'{}' is not a valid integer ({})", segment, e),
    })
}
