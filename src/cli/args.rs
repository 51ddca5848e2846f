//! Command line argument parsing.
//!
//! Every input can also come from the `INPUT_<NAME>` variables GitHub Actions
//! sets for a step, so the binary runs unchanged as an action.

use super::OutputManager;
use crate::EnvConfig;
use clap::Parser;

/// Upload files to a GitHub release
#[derive(Parser, Debug, Default)]
#[command(
    name = "release_asset_upload",
    version,
    about = "Upload files to a GitHub release, creating the release if needed",
    long_about = "Upload one or more files as assets of the GitHub release for a tag.
The release is created when it does not exist yet.

Usage:
  release_asset_upload --repo-token $TOKEN --tag v1.0.0 --file target/release/app
  release_asset_upload --repo-token $TOKEN --tag refs/tags/v1.0.0 --file 'dist/*' --glob-on true"
)]
pub struct Args {
    /// GitHub token used to authenticate
    #[arg(long, env = "INPUT_REPO_TOKEN", hide_env_values = true)]
    pub repo_token: Option<String>,

    /// File to upload, or glob pattern when glob_on is true
    #[arg(long, env = "INPUT_FILE")]
    pub file: Option<String>,

    /// Tag of the release; refs/tags/ and refs/heads/ prefixes are removed
    #[arg(long, env = "INPUT_TAG")]
    pub tag: Option<String>,

    /// Target repository as owner/repo (defaults to the workflow repository)
    #[arg(long, env = "INPUT_REPO_NAME")]
    pub repo_name: Option<String>,

    /// "true" to treat file as a glob pattern
    #[arg(long, env = "INPUT_GLOB_ON", value_name = "BOOL")]
    pub glob_on: Option<String>,

    /// "true" to replace existing assets with the same name
    #[arg(long, env = "INPUT_OVERWRITE", value_name = "BOOL")]
    pub overwrite: Option<String>,

    /// "true" to mark a newly created release as prerelease
    #[arg(long, env = "INPUT_PRERELEASE", value_name = "BOOL")]
    pub prerelease: Option<String>,

    /// Name of a newly created release
    #[arg(long, env = "INPUT_RELEASE_NAME")]
    pub release_name: Option<String>,

    /// Body of a newly created release
    #[arg(long, env = "INPUT_BODY")]
    pub body: Option<String>,

    /// Title used in the default release body (defaults to the tag)
    #[arg(long, env = "INPUT_TITLE")]
    pub title: Option<String>,

    /// Asset name for a single file; $tag is replaced by the tag
    #[arg(long, env = "INPUT_ASSET_NAME")]
    pub asset_name: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Per-run settings for the command layer
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: OutputManager,
    env: EnvConfig,
}

impl RuntimeConfig {
    /// Create runtime configuration from an environment snapshot
    pub fn new(env: EnvConfig) -> Self {
        Self {
            output: OutputManager::from_env(&env),
            env,
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &OutputManager {
        &self.output
    }

    /// Get the environment snapshot
    pub fn env(&self) -> &EnvConfig {
        &self.env
    }
}
