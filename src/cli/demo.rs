use crate::cli::resolve::{demo_graph, print_resolution, resolve, DEMO_START};
use crate::services::parser::semver_version_extended;
use crate::utils::error::Result;

/// Print a couple of illustrative versions and their scores
#[derive(Debug, Default)]
pub struct DemoCommand;

impl DemoCommand {
    pub fn execute(&self) -> Result<()> {
        println!("--- Semantic Version X ---");

        let mixed = semver_version_extended("1.stable", "4.experimental", "2.stable")?;
        println!("Version created: {mixed}");
        println!("Coherence score: {} (mixed stability)", mixed.coherence_score());

        println!();
        println!("--- Migration/Legacy ---");

        let legacy = semver_version_extended("0.legacy", "0.legacy", "0.legacy")?;
        println!("Version created: {legacy}");
        println!("Coherence score: {} (fully legacy)", legacy.coherence_score());

        println!();
        println!("--- Dependency Resolution ---");
        print_resolution(&resolve(&demo_graph(), DEMO_START));

        Ok(())
    }
}
