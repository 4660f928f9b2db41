// semverx - Extended semantic versions
// Main CLI entry point

use clap::Parser;
use std::process;
use semverx::cli::{Cli, CliDispatcher};
use semverx::logging::{init_logging, LogConfig};
use semverx::utils::error::UserError;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("Warning: {err:#}");
    }

    let result = CliDispatcher::execute(cli.command);

    if let Err(err) = result {
        let user_error = UserError::from_semverx_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
