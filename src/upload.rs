//! The upload workflow: resolve the repository and release, expand the file
//! input, publish every asset.

use crate::EnvConfig;
use crate::assets::{UploadReport, expand_assets, publish_assets};
use crate::config::UploadConfig;
use crate::context::resolve_repository;
use crate::error::Result;
use crate::github::{GitHubReleaseManager, ReleaseApi, ReleaseOrigin, ReleaseSettings};

/// Run one upload against `api`.
///
/// Configuration and release resolution errors abort the run. Per-asset
/// problems are collected in the returned report instead.
pub async fn run_upload<A: ReleaseApi>(
    api: &A,
    config: &UploadConfig,
    env: &EnvConfig,
) -> Result<UploadReport> {
    let repo = resolve_repository(config.repo_name.as_deref(), env)?;
    log::info!("Publishing to {} at tag {}", repo, config.tag);

    let settings = ReleaseSettings {
        tag: config.tag.clone(),
        prerelease: config.prerelease,
        release_name: config.release_name.clone(),
        body: config.body.clone(),
        title: config.title.clone(),
    };
    let manager = GitHubReleaseManager::new(api, &repo);
    let release = manager.find_or_create_release(&settings).await?;
    match release.origin() {
        ReleaseOrigin::Found => log::info!("Using existing release {}", release.id()),
        ReleaseOrigin::Created => log::info!("Created release {}", release.id()),
    }

    let assets = expand_assets(
        &config.tag,
        &config.file,
        config.glob_on,
        config.asset_name.as_deref(),
    )?;

    Ok(publish_assets(&release, &config.tag, &assets, config.overwrite).await)
}
