//! GitHub integration for release operations

mod api;
mod client;
mod release_manager;
mod types;

pub use api::ReleaseApi;
pub use client::{ASSET_CONTENT_TYPE, GitHubClient, asset_upload_url};
pub use release_manager::{
    GitHubReleaseManager, ReleaseHandle, ReleaseOrigin, ReleaseSettings, create_release_description,
};
pub use types::{NewRelease, Release, RemoteAsset, UploadedAsset};
