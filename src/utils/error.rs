// Common error types for semverx

/// Errors raised while building, parsing or loading extended versions
#[derive(Debug, thiserror::Error)]
pub enum SemverxError {
    /// A version slot was not an integer, pair or component
    #[error("Invalid component format: {0}")]
    InvalidComponent(String),

    /// The integer segment of a version string did not parse
    #[error("Failed to parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// A canonical version string had the wrong shape
    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    /// A state name that is not stable, experimental or legacy
    #[error("Unknown state '{0}' (expected stable, experimental or legacy)")]
    UnknownState(String),

    /// A resolve start node that is not in the graph
    #[error("Unknown node '{0}'")]
    UnknownNode(String),

    /// Manifest could not be read or understood
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SemverxError {
    /// Whether the error was caused by bad user input rather than the environment
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            SemverxError::InvalidComponent(_)
                | SemverxError::Parse { .. }
                | SemverxError::MalformedVersion(_)
                | SemverxError::UnknownState(_)
                | SemverxError::UnknownNode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SemverxError>;

/// Terminal-facing rendering of an error with a hint and exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub title: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_semverx_error(err: &SemverxError) -> Self {
        let hint = match err {
            SemverxError::InvalidComponent(_) => Some(
                "Each slot must be an integer, [integer, \"state\"], { value, state } or \"<int>.<state>\".",
            ),
            SemverxError::Parse { .. } => {
                Some("Components look like <integer>[.<state>], e.g. 1.stable or 4.experimental.")
            }
            SemverxError::MalformedVersion(_) => {
                Some("Canonical versions look like 1.stable.4.experimental.2.stable.")
            }
            SemverxError::UnknownState(_) => Some("Valid states: stable, experimental, legacy."),
            SemverxError::UnknownNode(_) => {
                Some("Pass --start with the id of a [[node]] in the graph file.")
            }
            SemverxError::Config(_) => {
                Some("Manifests need a [version] table with major, minor and patch; graph files need [[node]] entries with an id and version.")
            }
            SemverxError::Io(_) | SemverxError::Serialization(_) => None,
        };

        Self {
            title: err.to_string(),
            hint: hint.map(str::to_string),
            exit_code: if err.is_input_error() { 2 } else { 1 },
        }
    }

    /// Write the error to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.title);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
