use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::cli::report::VersionReport;
use crate::utils::config::{get_manifest_path, ConfigParser};
use crate::utils::error::Result;

/// Load a version from a manifest and report it
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Manifest path (default: ./semverx.toml)
    #[arg(long, env = "SEMVERX_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn execute(&self) -> Result<()> {
        let path = self.manifest.clone().unwrap_or_else(get_manifest_path);
        info!(path = %path.display(), "Checking manifest");

        let version = ConfigParser::load_manifest(&path)?;
        VersionReport::new(&version).print(self.json)
    }
}
