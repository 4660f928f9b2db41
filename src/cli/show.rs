use clap::Args;
use tracing::info;

use crate::cli::report::VersionReport;
use crate::services::parser::semver_version_extended;
use crate::utils::error::Result;

/// Parse three component strings and report the resulting version
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Major component, e.g. "1.stable"
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    pub major: String,

    /// Minor component, e.g. "4.experimental"
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    pub minor: String,

    /// Patch component, e.g. "2" (state defaults to stable)
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    pub patch: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    pub fn execute(&self) -> Result<()> {
        let version = semver_version_extended(&self.major, &self.minor, &self.patch)?;
        info!(version = %version, score = version.coherence_score(), "Built extended version");

        VersionReport::new(&version).print(self.json)
    }
}
