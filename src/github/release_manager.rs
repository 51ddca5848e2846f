//! Release lookup and creation, and the handle used for asset operations

use super::api::ReleaseApi;
use super::types::{NewRelease, Release, RemoteAsset, UploadedAsset};
use crate::context::RepositoryCoordinates;
use crate::error::Result;
use bytes::Bytes;

/// What to create when no release exists for the tag
#[derive(Debug, Clone, Default)]
pub struct ReleaseSettings {
    /// Tag the release belongs to
    pub tag: String,
    /// Mark a created release as prerelease
    pub prerelease: bool,
    /// Display name of a created release
    pub release_name: Option<String>,
    /// Body of a created release
    pub body: Option<String>,
    /// Title used in the default body
    pub title: String,
}

/// How a release handle was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOrigin {
    /// The release already existed for the tag
    Found,
    /// The release was created by this run
    Created,
}

/// Release in the target repository, usable for asset operations
pub struct ReleaseHandle<'a, A: ReleaseApi> {
    api: &'a A,
    repo: &'a RepositoryCoordinates,
    release: Release,
    origin: ReleaseOrigin,
}

impl<'a, A: ReleaseApi> ReleaseHandle<'a, A> {
    /// Wrap a release fetched from or created in `repo`
    pub fn new(
        api: &'a A,
        repo: &'a RepositoryCoordinates,
        release: Release,
        origin: ReleaseOrigin,
    ) -> Self {
        Self {
            api,
            repo,
            release,
            origin,
        }
    }

    /// Release ID
    pub fn id(&self) -> u64 {
        self.release.id
    }

    /// Upload endpoint template
    pub fn upload_url(&self) -> &str {
        &self.release.upload_url
    }

    /// Release data as returned by the API
    pub fn release(&self) -> &Release {
        &self.release
    }

    /// Whether the release was found or created
    pub fn origin(&self) -> ReleaseOrigin {
        self.origin
    }

    /// All assets currently attached to the release
    pub async fn list_assets(&self) -> Result<Vec<RemoteAsset>> {
        self.api.list_release_assets(self.repo, self.release.id).await
    }

    /// Delete one asset of the release
    pub async fn delete_asset(&self, asset_id: u64) -> Result<()> {
        self.api.delete_release_asset(self.repo, asset_id).await
    }

    /// Upload `content` as asset `name`
    pub async fn upload_asset(&self, name: &str, content: Bytes) -> Result<UploadedAsset> {
        self.api
            .upload_release_asset(&self.release.upload_url, name, content)
            .await
    }
}

/// Finds or creates releases in one repository
pub struct GitHubReleaseManager<'a, A: ReleaseApi> {
    api: &'a A,
    repo: &'a RepositoryCoordinates,
}

impl<'a, A: ReleaseApi> GitHubReleaseManager<'a, A> {
    /// Create a manager for `repo`
    pub fn new(api: &'a A, repo: &'a RepositoryCoordinates) -> Self {
        Self { api, repo }
    }

    /// Return the release for `settings.tag`, creating it when the lookup finds nothing.
    ///
    /// An existing release is returned as-is; `settings` only shapes a new one.
    pub async fn find_or_create_release(&self, settings: &ReleaseSettings) -> Result<ReleaseHandle<'a, A>> {
        if let Some(release) = self.api.get_release_by_tag(self.repo, &settings.tag).await? {
            log::debug!("Found release {} for tag {}.", release.id, settings.tag);
            return Ok(ReleaseHandle::new(self.api, self.repo, release, ReleaseOrigin::Found));
        }

        log::debug!(
            "Release for tag {} doesn't exist yet so we'll create it now.",
            settings.tag
        );
        let release = self.create_release(settings).await?;
        Ok(ReleaseHandle::new(self.api, self.repo, release, ReleaseOrigin::Created))
    }

    async fn create_release(&self, settings: &ReleaseSettings) -> Result<Release> {
        let new_release = NewRelease {
            tag_name: settings.tag.clone(),
            name: settings.release_name.clone().filter(|n| !n.is_empty()),
            body: create_release_description(settings.body.as_deref(), &settings.title),
            prerelease: settings.prerelease,
        };
        self.api.create_release(self.repo, &new_release).await
    }
}

/// Body for a new release: the configured body, or a title + change log stub
pub fn create_release_description(body: Option<&str>, title: &str) -> String {
    match body {
        Some(body) if !body.is_empty() => body.to_string(),
        _ => format!("{}\n{}\n", title, change_log()),
    }
}

fn change_log() -> &'static str {
    "Change Log"
}
