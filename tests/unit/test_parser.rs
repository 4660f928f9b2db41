use semverx::{
    parse_canonical, parse_component, semver_version_extended, ExtendedVersion, SemverxError,
    State, VersionComponent,
};

#[cfg(test)]
mod component_string_tests {
    use super::*;

    #[test]
    fn test_missing_state_defaults_to_stable() {
        assert_eq!(parse_component("9").unwrap(), VersionComponent::stable(9));
    }

    #[test]
    fn test_extra_segments_are_ignored() {
        let component = parse_component("3.experimental.whatever.else").unwrap();
        assert_eq!(component, VersionComponent::new(3, State::Experimental));
    }

    #[test]
    fn test_integer_segment_whitespace_is_trimmed() {
        assert_eq!(parse_component(" 12 .legacy").unwrap(), VersionComponent::new(12, State::Legacy));
    }

    #[test]
    fn test_non_integer_segment_fails() {
        for input in ["x.stable", "", ".stable", "1x.stable", "1,5.stable"] {
            let err = parse_component(input).unwrap_err();
            assert!(matches!(err, SemverxError::Parse { .. }), "{input:?} gave {err:?}");
        }
    }
}

#[cfg(test)]
mod version_string_tests {
    use super::*;

    #[test]
    fn test_mixed_stability_scenario() {
        let version = semver_version_extended("1.stable", "4.experimental", "2.stable").unwrap();
        assert_eq!(version.to_string(), "1.stable.4.experimental.2.stable");
        assert_eq!(version.coherence_score(), 0.85);
    }

    #[test]
    fn test_fully_legacy_scenario() {
        let version = semver_version_extended("0.legacy", "0.legacy", "0.legacy").unwrap();
        assert_eq!(version.to_string(), "0.legacy.0.legacy.0.legacy");
        assert_eq!(version.coherence_score(), 0.1);
    }

    #[test]
    fn test_non_integer_major_fails() {
        let err = semver_version_extended("x.stable", "0.stable", "0.stable").unwrap_err();
        assert!(matches!(err, SemverxError::Parse { .. }));
        assert!(err.to_string().contains("x.stable"));
    }

    #[test]
    fn test_canonical_round_trip() {
        let version = semver_version_extended("7.legacy", "0", "13.exp").unwrap();
        let rendered = version.to_string();
        assert_eq!(rendered, "7.legacy.0.stable.13.experimental");

        let reparsed: ExtendedVersion = rendered.parse().unwrap();
        assert_eq!(reparsed, version);
        assert_eq!(parse_canonical(&rendered).unwrap(), version);
    }

    #[test]
    fn test_canonical_requires_exact_state_names() {
        let err = parse_canonical("1.stabel.2.stable.3.stable").unwrap_err();
        assert!(matches!(err, SemverxError::UnknownState(_)));
    }
}
