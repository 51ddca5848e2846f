//! release_asset_upload - publish build artifacts to a GitHub release.
//!
//! Finds or creates the release for a tag and uploads the configured files
//! as its assets.

use release_asset_upload::EnvConfig;
use release_asset_upload::cli;
use release_asset_upload::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    let env = EnvConfig::from_env();
    cli::init_logging(&env);

    match cli::run(env.clone()).await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::from_env(&env);
            output.error(&format!("Fatal error: {e}"));
            process::exit(1);
        }
    }
}
