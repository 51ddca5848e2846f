//! Remote operations the upload workflow needs from the hosting service.
//!
//! `GitHubClient` is the production implementation; tests substitute an
//! in-memory one.

use super::types::{NewRelease, Release, RemoteAsset, UploadedAsset};
use crate::context::RepositoryCoordinates;
use crate::error::Result;
use bytes::Bytes;
use std::future::Future;

/// Release and release-asset operations
pub trait ReleaseApi {
    /// Look up a release by exact tag name.
    ///
    /// Returns `Ok(None)` when the API reports that no such release exists;
    /// every other failure is an error.
    fn get_release_by_tag(
        &self,
        repo: &RepositoryCoordinates,
        tag: &str,
    ) -> impl Future<Output = Result<Option<Release>>>;

    /// Create a release
    fn create_release(
        &self,
        repo: &RepositoryCoordinates,
        release: &NewRelease,
    ) -> impl Future<Output = Result<Release>>;

    /// List every asset of a release, across all pages
    fn list_release_assets(
        &self,
        repo: &RepositoryCoordinates,
        release_id: u64,
    ) -> impl Future<Output = Result<Vec<RemoteAsset>>>;

    /// Delete a release asset
    fn delete_release_asset(
        &self,
        repo: &RepositoryCoordinates,
        asset_id: u64,
    ) -> impl Future<Output = Result<()>>;

    /// Upload bytes to a release's upload endpoint under `name`
    fn upload_release_asset(
        &self,
        upload_url: &str,
        name: &str,
        content: Bytes,
    ) -> impl Future<Output = Result<UploadedAsset>>;
}
