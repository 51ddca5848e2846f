//! # release_asset_upload
//!
//! Publish build artifacts to a GitHub release from CI.
//!
//! Given a tag, the crate finds the release for it (creating one when it does
//! not exist), expands the configured file or glob pattern, and uploads each
//! file as a release asset, optionally replacing assets of the same name.
//!
//! ## Usage
//!
//! ```bash
//! release_asset_upload --repo-token "$GITHUB_TOKEN" --tag v1.2.0 --file target/release/app
//! release_asset_upload --repo-token "$GITHUB_TOKEN" --tag v1.2.0 --file 'dist/*' --glob-on true --overwrite true
//! ```
//!
//! Inside GitHub Actions the same inputs are read from `INPUT_*` variables and
//! the download URL is written to the `browser_download_url` step output.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod assets;
pub mod cli;
pub mod config;
pub mod context;
pub mod env_config;
pub mod error;
pub mod github;
pub mod upload;

pub use assets::{Asset, AssetOutcome, UploadReport};
pub use cli::Args;
pub use config::UploadConfig;
pub use context::RepositoryCoordinates;
pub use env_config::EnvConfig;
pub use error::{AssetError, CliError, GitHubError, ReleaseError, Result};
pub use github::{GitHubClient, GitHubReleaseManager, ReleaseApi, ReleaseHandle};
pub use upload::run_upload;
