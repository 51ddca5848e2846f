//! GitHub REST API payloads used by the release workflow

use serde::{Deserialize, Serialize};

/// Release as returned by get-by-tag and create
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Release {
    /// Release ID
    pub id: u64,
    /// Tag the release points at
    pub tag_name: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Release notes
    #[serde(default)]
    pub body: Option<String>,
    /// Whether the release is marked as prerelease
    #[serde(default)]
    pub prerelease: bool,
    /// Whether the release is a draft
    #[serde(default)]
    pub draft: bool,
    /// Web page of the release
    #[serde(default)]
    pub html_url: String,
    /// Hypermedia upload endpoint, e.g. `https://uploads.github.com/.../assets{?name,label}`
    pub upload_url: String,
}

/// Asset already attached to a release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteAsset {
    /// Asset ID
    pub id: u64,
    /// File name of the asset
    pub name: String,
    /// Public download URL
    pub browser_download_url: String,
}

/// Response of the upload endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadedAsset {
    /// Asset ID
    #[serde(default)]
    pub id: u64,
    /// File name of the asset
    #[serde(default)]
    pub name: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// Public download URL; missing means the upload cannot be reported
    #[serde(default)]
    pub browser_download_url: Option<String>,
}

/// Request body for creating a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    /// Tag to attach the release to
    pub tag_name: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release notes
    pub body: String,
    /// Whether to mark as prerelease
    pub prerelease: bool,
}
