// CLI module for command-line interface

pub mod check;
pub mod compare;
pub mod demo;
pub mod report;
pub mod resolve;
pub mod show;

use clap::{ArgAction, Parser, Subcommand};
use crate::utils::error::Result;

use self::check::CheckCommand;
use self::compare::CompareCommand;
use self::demo::DemoCommand;
use self::resolve::ResolveCommand;
use self::show::ShowCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "semverx")]
#[command(about = "Extended semantic versions with per-component stability states")]
#[command(long_about = r#"semverx tags each part of a major.minor.patch version with a state
(stable, experimental or legacy) and summarizes the result as a coherence
score between 0.0 and 1.0. The major component weighs the most.

State words are matched loosely: anything containing "exp" is experimental,
anything containing "leg" is legacy, and every other word (including typos
such as "stabel" or "bogus") is treated as stable.

Examples:
  semverx show 1.stable 4.experimental 2.stable   Render and score a version
  semverx show 1 0 3 --json                      Plain numbers are stable
  semverx check --manifest semverx.toml          Read a version from a manifest
  semverx compare legacy stable                  Compare two states
  semverx resolve graph.toml --start app         Pick the best dependency path
  semverx demo                                   Print example versions"#)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build a version from three "<int>[.<state>]" strings
    #[command(long_about = r#"Build a version from three component strings and print its canonical
form and coherence score.

Each component is "<integer>[.<state>]". Only the first two dot-separated
segments are read; a missing state means stable.

Examples:
  semverx show 1.stable 4.experimental 2.stable
  semverx show 0.legacy 0.legacy 0.legacy --json"#)]
    Show(ShowCommand),

    /// Load a version from a TOML manifest
    #[command(long_about = r#"Load the [version] table of a manifest and report it.

Each slot may be an integer, a [integer, "state"] pair, a
{ value = .., state = ".." } table or a "<int>.<state>" string:

  [version]
  major = "1.stable"
  minor = [4, "experimental"]
  patch = { value = 2, state = "stable" }"#)]
    Check(CheckCommand),

    /// Compare two states (legacy < experimental < stable)
    Compare(CompareCommand),

    /// Walk a dependency graph along the best-scoring children
    #[command(long_about = r#"Walk a dependency graph from a start node, descending at each step into
the child with the highest combined score:

  0.50 * consensus (mean of yes=1, nil=0.5, no=0 votes; 0.5 when unvoted)
  + 0.30 * artifact score (clamped to 0..1)
  + 0.20 * version weight (grows with major.minor.patch, scaled by channel:
           stable/lts 1.0, legacy 0.8, experimental 0.6, other 0.75)

Scores within 1e-6 of each other go to the higher version. The walk stops at a
leaf or when it would revisit a node.

  start = "app"

  [[node]]
  id = "app"
  version = "1.0.0-stable"
  artifact_score = 0.95
  votes = ["yes", "yes", "nil"]
  depends_on = ["lib"]

Examples:
  semverx resolve graph.toml
  semverx resolve graph.toml --start lib --json
  semverx resolve --demo"#)]
    Resolve(ResolveCommand),

    /// Print example versions and their scores
    Demo,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Show(cmd) => cmd.execute(),
            Commands::Check(cmd) => cmd.execute(),
            Commands::Compare(cmd) => cmd.execute(),
            Commands::Resolve(cmd) => cmd.execute(),
            Commands::Demo => DemoCommand.execute(),
        }
    }
}
