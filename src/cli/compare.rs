use clap::Args;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::cli::report::to_json;
use crate::models::state::State;
use crate::utils::error::Result;

/// Compare two states using Legacy < Experimental < Stable
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// First state name
    pub left: String,

    /// Second state name
    pub right: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for compare command
#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub left: State,
    pub right: State,
    pub ordering: String,
}

impl CompareCommand {
    pub fn execute(&self) -> Result<()> {
        let left: State = self.left.parse()?;
        let right: State = self.right.parse()?;
        let symbol = ordering_symbol(left.cmp(&right));

        if self.json {
            let response = CompareResponse {
                left,
                right,
                ordering: symbol.to_string(),
            };
            println!("{}", to_json(&response)?);
        } else {
            println!("{left} {symbol} {right}");
        }

        Ok(())
    }
}

const fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
