// semverx - Extended semantic versions
// Core library functionality

pub mod cli;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::channel_version::{Channel, ChannelVersion};
pub use models::component::{ComponentSpec, VersionComponent};
pub use models::extended_version::ExtendedVersion;
pub use models::node::{Node, Vote};
pub use models::state::State;
pub use services::resolver::Graph;
pub use services::parser::{parse_canonical, parse_component, semver_version_extended};
pub use utils::error::{Result, SemverxError};
