//! Command execution with top-level error reporting.

mod upload;

pub use upload::DOWNLOAD_URL_OUTPUT;

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;

use upload::execute_upload;

/// Execute the upload and turn fatal errors into a failure report
pub async fn execute_command(args: Args, config: &RuntimeConfig) -> Result<i32> {
    match execute_upload(&args, config).await {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.output().error(&e.to_string());

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() && !config.output().is_github_actions() {
                let _ = config.output().info("Recovery suggestions:");
                for suggestion in suggestions {
                    let _ = config.output().indent(&format!("• {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
