//! Upload command: builds the client and reports the run.

use crate::assets::UploadReport;
use crate::cli::{Args, RuntimeConfig};
use crate::config::UploadConfig;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::upload::run_upload;

/// Name of the step output carrying download URLs
pub const DOWNLOAD_URL_OUTPUT: &str = "browser_download_url";

/// Execute an upload and return the process exit code
pub(super) async fn execute_upload(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let upload_config = UploadConfig::from_args(args)?;
    let client = GitHubClient::new(&upload_config.repo_token, &config.env().api_url())?;

    let report = run_upload(&client, &upload_config, config.env()).await?;
    report_outcome(&report, config)?;

    Ok(if report.is_success() { 0 } else { 1 })
}

fn report_outcome(report: &UploadReport, config: &RuntimeConfig) -> Result<()> {
    let output = config.output();

    for url in report.download_urls() {
        output.set_output(DOWNLOAD_URL_OUTPUT, url)?;
    }

    for failure in report.failures() {
        output.error(failure);
    }

    if report.is_success() {
        output.success(&format!(
            "Uploaded {} asset(s), skipped {}",
            report.uploaded(),
            report.skipped()
        ))?;
    }

    Ok(())
}
