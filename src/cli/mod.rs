//! Command line interface for release_asset_upload.
//!
//! Parses inputs from flags or the GitHub Actions environment, runs the
//! upload and maps the outcome to an exit code.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use commands::execute_command;
pub use output::{OutputManager, escape_data, init_logging};

use crate::EnvConfig;
use crate::error::Result;

/// Main CLI entry point
pub async fn run(env: EnvConfig) -> Result<i32> {
    let args = Args::parse_args();
    let config = RuntimeConfig::new(env);
    execute_command(args, &config).await
}
