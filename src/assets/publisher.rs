//! Publishing local files as release assets

use super::expander::Asset;
use crate::error::{AssetError, ReleaseError, Result};
use crate::github::{ReleaseApi, ReleaseHandle};
use bytes::Bytes;
use std::path::PathBuf;

/// Result of publishing one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    /// File uploaded, possibly after replacing an older asset
    Uploaded {
        /// Published name
        name: String,
        /// Download URL of the new asset
        url: String,
        /// Uploaded bytes
        size: u64,
    },
    /// Same-named asset exists and overwrite is disabled; nothing uploaded
    Existing {
        /// Published name
        name: String,
        /// Download URL of the existing asset
        url: String,
    },
    /// Source is not a regular file
    Skipped {
        /// Local path that was skipped
        source: PathBuf,
    },
}

/// Collected outcome of a whole run
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    download_urls: Vec<String>,
    failures: Vec<String>,
    uploaded: usize,
    existing: usize,
    skipped: usize,
}

impl UploadReport {
    /// Record a failure message
    pub fn fail(&mut self, message: impl Into<String>) {
        self.failures.push(message.into());
    }

    /// Record the result of publishing one asset.
    ///
    /// An `Existing` outcome yields its URL and also counts as a failure.
    pub fn record(&mut self, result: Result<AssetOutcome>) {
        match result {
            Ok(AssetOutcome::Uploaded { url, .. }) => {
                self.uploaded += 1;
                self.download_urls.push(url);
            }
            Ok(AssetOutcome::Existing { name, url }) => {
                self.existing += 1;
                self.download_urls.push(url.clone());
                self.fail(AssetError::OverwriteDisabled { name, url }.to_string());
            }
            Ok(AssetOutcome::Skipped { .. }) => self.skipped += 1,
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Whether the run finished without failures
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Download URLs in the order they were produced
    pub fn download_urls(&self) -> &[String] {
        &self.download_urls
    }

    /// Value of the `browser_download_url` output (last one wins)
    pub fn browser_download_url(&self) -> Option<&str> {
        self.download_urls.last().map(String::as_str)
    }

    /// Failure messages
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Number of files uploaded
    pub fn uploaded(&self) -> usize {
        self.uploaded
    }

    /// Number of collisions left untouched
    pub fn existing(&self) -> usize {
        self.existing
    }

    /// Number of sources skipped as non-files
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Publish every asset to `release`.
///
/// Each asset is attempted regardless of earlier failures; an empty list is
/// itself a failure.
pub async fn publish_assets<A: ReleaseApi>(
    release: &ReleaseHandle<'_, A>,
    tag: &str,
    assets: &[Asset],
    overwrite: bool,
) -> UploadReport {
    let mut report = UploadReport::default();

    if assets.is_empty() {
        report.fail(AssetError::NoMatchingFiles.to_string());
    }

    for asset in assets {
        let result = publish_asset(release, tag, asset, overwrite).await;
        if let Err(e) = &result {
            log::debug!("Publishing {} as {} failed: {}", asset.source.display(), asset.name, e);
        }
        report.record(result);
    }

    report
}

/// Publish one asset: skip non-files, resolve name collisions, upload.
pub async fn publish_asset<A: ReleaseApi>(
    release: &ReleaseHandle<'_, A>,
    tag: &str,
    asset: &Asset,
    overwrite: bool,
) -> Result<AssetOutcome> {
    let is_file = tokio::fs::metadata(&asset.source)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        log::debug!("Skipping {}, since its not a file", asset.source.display());
        return Ok(AssetOutcome::Skipped {
            source: asset.source.clone(),
        });
    }

    let current = release.list_assets().await?;
    match current.into_iter().find(|a| a.name == asset.name) {
        Some(duplicate) => {
            log::debug!("An asset called {} already exists in release {}.", asset.name, tag);
            if !overwrite {
                return Ok(AssetOutcome::Existing {
                    name: asset.name.clone(),
                    url: duplicate.browser_download_url,
                });
            }
            log::debug!("Overwrite is true. Deleting current asset.");
            release.delete_asset(duplicate.id).await?;
        }
        None => log::debug!(
            "No pre-existing asset called {} found in release {}.",
            asset.name,
            tag
        ),
    }

    upload_file(release, asset).await
}

async fn upload_file<A: ReleaseApi>(
    release: &ReleaseHandle<'_, A>,
    asset: &Asset,
) -> Result<AssetOutcome> {
    let content = tokio::fs::read(&asset.source)
        .await
        .map_err(|source| AssetError::ReadFailed {
            path: asset.source.clone(),
            source,
        })?;
    let size = content.len() as u64;

    let uploaded = release.upload_asset(&asset.name, Bytes::from(content)).await?;
    match uploaded.browser_download_url {
        Some(url) if !url.is_empty() => {
            log::debug!("Uploaded {} ({} bytes).", asset.name, size);
            Ok(AssetOutcome::Uploaded {
                name: asset.name.clone(),
                url,
                size,
            })
        }
        _ => Err(ReleaseError::Asset(AssetError::UploadFailed {
            name: asset.name.clone(),
        })),
    }
}
