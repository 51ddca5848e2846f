//! In-memory release API used by workflow tests
#![allow(dead_code)]

use bytes::Bytes;
use release_asset_upload::error::{GitHubError, Result};
use release_asset_upload::github::{NewRelease, Release, RemoteAsset, UploadedAsset};
use release_asset_upload::{ReleaseApi, RepositoryCoordinates};
use std::cell::{Cell, RefCell};

/// A recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetReleaseByTag(String),
    CreateRelease(NewRelease),
    ListAssets(u64),
    DeleteAsset(u64),
    Upload { name: String, content: Vec<u8> },
}

/// Fake GitHub holding releases and a single shared asset list
#[derive(Default)]
pub struct FakeReleaseApi {
    pub releases: RefCell<Vec<Release>>,
    pub assets: RefCell<Vec<RemoteAsset>>,
    pub calls: RefCell<Vec<Call>>,
    /// Status returned by get-by-tag instead of a result
    pub lookup_error: Option<u16>,
    /// Status returned by list-assets instead of a result
    pub list_error: Option<u16>,
    /// Upload responses carry no download URL
    pub upload_without_url: bool,
    pub next_id: Cell<u64>,
}

impl FakeReleaseApi {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(100),
            ..Default::default()
        }
    }

    pub fn with_release(self, release: Release) -> Self {
        self.releases.borrow_mut().push(release);
        self
    }

    pub fn with_asset(self, id: u64, name: &str) -> Self {
        self.assets.borrow_mut().push(RemoteAsset {
            id,
            name: name.to_string(),
            browser_download_url: download_url(name, id),
        });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn create_calls(&self) -> Vec<NewRelease> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateRelease(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

pub fn download_url(name: &str, id: u64) -> String {
    format!("https://github.com/o/r/releases/download/{}/{}", id, name)
}

pub fn release(id: u64, tag: &str) -> Release {
    Release {
        id,
        tag_name: tag.to_string(),
        name: Some(format!("Release {}", tag)),
        body: Some("existing body".to_string()),
        prerelease: false,
        draft: false,
        html_url: format!("https://github.com/o/r/releases/tag/{}", tag),
        upload_url: format!(
            "https://uploads.github.com/repos/o/r/releases/{}/assets{{?name,label}}",
            id
        ),
    }
}

pub fn coordinates() -> RepositoryCoordinates {
    RepositoryCoordinates {
        owner: "o".to_string(),
        name: "r".to_string(),
    }
}

fn api_error(operation: &'static str, status: u16) -> release_asset_upload::ReleaseError {
    GitHubError::Api {
        operation,
        status,
        message: "Bad credentials".to_string(),
    }
    .into()
}

impl ReleaseApi for FakeReleaseApi {
    async fn get_release_by_tag(
        &self,
        _repo: &RepositoryCoordinates,
        tag: &str,
    ) -> Result<Option<Release>> {
        self.calls
            .borrow_mut()
            .push(Call::GetReleaseByTag(tag.to_string()));
        if let Some(status) = self.lookup_error {
            return Err(api_error("get release by tag", status));
        }
        Ok(self
            .releases
            .borrow()
            .iter()
            .find(|r| r.tag_name == tag)
            .cloned())
    }

    async fn create_release(
        &self,
        _repo: &RepositoryCoordinates,
        new_release: &NewRelease,
    ) -> Result<Release> {
        self.calls
            .borrow_mut()
            .push(Call::CreateRelease(new_release.clone()));
        let mut created = release(self.allocate_id(), &new_release.tag_name);
        created.name = new_release.name.clone();
        created.body = Some(new_release.body.clone());
        created.prerelease = new_release.prerelease;
        self.releases.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn list_release_assets(
        &self,
        _repo: &RepositoryCoordinates,
        release_id: u64,
    ) -> Result<Vec<RemoteAsset>> {
        self.calls.borrow_mut().push(Call::ListAssets(release_id));
        if let Some(status) = self.list_error {
            return Err(api_error("list release assets", status));
        }
        Ok(self.assets.borrow().clone())
    }

    async fn delete_release_asset(&self, _repo: &RepositoryCoordinates, asset_id: u64) -> Result<()> {
        self.calls.borrow_mut().push(Call::DeleteAsset(asset_id));
        self.assets.borrow_mut().retain(|a| a.id != asset_id);
        Ok(())
    }

    async fn upload_release_asset(
        &self,
        _upload_url: &str,
        name: &str,
        content: Bytes,
    ) -> Result<UploadedAsset> {
        self.calls.borrow_mut().push(Call::Upload {
            name: name.to_string(),
            content: content.to_vec(),
        });
        let id = self.allocate_id();
        let url = download_url(name, id);
        self.assets.borrow_mut().push(RemoteAsset {
            id,
            name: name.to_string(),
            browser_download_url: url.clone(),
        });
        Ok(UploadedAsset {
            id,
            name: name.to_string(),
            size: content.len() as u64,
            browser_download_url: if self.upload_without_url { None } else { Some(url) },
        })
    }
}
