//! GitHub REST client: octocrab for the API, reqwest for asset uploads

use super::api::ReleaseApi;
use super::types::{NewRelease, Release, RemoteAsset, UploadedAsset};
use crate::context::RepositoryCoordinates;
use crate::error::{GitHubError, ReleaseError, Result};
use bytes::Bytes;
use octocrab::{Octocrab, Page};
use reqwest::Response;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use url::Url;

/// Page size used when listing release assets
const ASSETS_PER_PAGE: u32 = 100;

/// Content type GitHub expects for release asset uploads from this tool
pub const ASSET_CONTENT_TYPE: &str = "binary/octet-stream";

/// rustls needs a process-wide crypto provider before octocrab builds its connector
static RUSTLS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Authenticated GitHub REST client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    uploads: reqwest::Client,
    api_url: Url,
}

impl GitHubClient {
    /// Create a client for `api_url` (e.g. `https://api.github.com`)
    pub fn new(token: &str, api_url: &str) -> Result<Self> {
        RUSTLS_INITIALIZED.get_or_init(|| {
            // Err only means another provider is already installed
            let _ = rustls::crypto::ring::default_provider().install_default();
        });

        let api_url = Url::parse(api_url).map_err(|e| GitHubError::ClientInit {
            reason: format!("invalid API URL '{}': {}", api_url, e),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(GitHubError::ClientInit {
                reason: format!("invalid API URL '{}'", api_url),
            }
            .into());
        }

        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(api_url.as_str())
            .and_then(|builder| builder.build())
            .map_err(|e| GitHubError::ClientInit {
                reason: e.to_string(),
            })?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            GitHubError::ClientInit {
                reason: format!("token is not a valid header value: {}", e),
            }
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let uploads = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| GitHubError::ClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            octocrab,
            uploads,
            api_url,
        })
    }

    /// Build `<api>/repos/<owner>/<name>/<segments...>` with each segment escaped
    fn repo_url(&self, repo: &RepositoryCoordinates, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["repos", repo.owner.as_str(), repo.name.as_str()])
                .extend(segments);
        }
        url
    }
}

impl ReleaseApi for GitHubClient {
    async fn get_release_by_tag(
        &self,
        repo: &RepositoryCoordinates,
        tag: &str,
    ) -> Result<Option<Release>> {
        const OPERATION: &str = "get release by tag";
        log::debug!("Getting release by tag {}.", tag);

        let url = self.repo_url(repo, &["releases", "tags", tag]);
        match self.octocrab.get::<Release, _, ()>(url.as_str(), None).await {
            Ok(release) => Ok(Some(release)),
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Ok(None)
            }
            Err(e) => Err(api_error(OPERATION, e)),
        }
    }

    async fn create_release(
        &self,
        repo: &RepositoryCoordinates,
        release: &NewRelease,
    ) -> Result<Release> {
        let url = self.repo_url(repo, &["releases"]);
        self.octocrab
            .post(url.as_str(), Some(release))
            .await
            .map_err(|e| api_error("create release", e))
    }

    async fn list_release_assets(
        &self,
        repo: &RepositoryCoordinates,
        release_id: u64,
    ) -> Result<Vec<RemoteAsset>> {
        const OPERATION: &str = "list release assets";
        let release_id = release_id.to_string();
        let mut url = self.repo_url(repo, &["releases", release_id.as_str(), "assets"]);
        url.query_pairs_mut()
            .append_pair("per_page", &ASSETS_PER_PAGE.to_string());

        let first: Page<RemoteAsset> = self
            .octocrab
            .get(url.as_str(), None::<&()>)
            .await
            .map_err(|e| api_error(OPERATION, e))?;

        self.octocrab
            .all_pages(first)
            .await
            .map_err(|e| api_error(OPERATION, e))
    }

    async fn delete_release_asset(&self, repo: &RepositoryCoordinates, asset_id: u64) -> Result<()> {
        self.octocrab
            .repos(repo.owner.as_str(), repo.name.as_str())
            .release_assets()
            .delete(asset_id)
            .await
            .map_err(|e| api_error("delete release asset", e))
    }

    async fn upload_release_asset(
        &self,
        upload_url: &str,
        name: &str,
        content: Bytes,
    ) -> Result<UploadedAsset> {
        const OPERATION: &str = "upload release asset";
        let url = asset_upload_url(upload_url, name)?;

        let request = self
            .uploads
            .post(url)
            .header(CONTENT_TYPE, ASSET_CONTENT_TYPE)
            .header(CONTENT_LENGTH, content.len() as u64)
            .body(content);

        let response = request
            .send()
            .await
            .map_err(|source| GitHubError::Http {
                operation: OPERATION,
                source,
            })?;
        json(response, OPERATION).await
    }
}

/// Turn a release `upload_url` template into a request URL for `name`.
///
/// The API returns `.../assets{?name,label}`; the template part is dropped
/// and `name` is added as a query parameter.
pub fn asset_upload_url(upload_url: &str, name: &str) -> Result<Url> {
    let base = upload_url
        .split_once('{')
        .map(|(base, _)| base)
        .unwrap_or(upload_url);

    let mut url = Url::parse(base).map_err(|e| GitHubError::InvalidUploadUrl {
        url: upload_url.to_string(),
        reason: e.to_string(),
    })?;
    url.query_pairs_mut().append_pair("name", name);
    Ok(url)
}

fn api_error(operation: &'static str, error: octocrab::Error) -> ReleaseError {
    match error {
        octocrab::Error::GitHub { source, .. } => GitHubError::Api {
            operation,
            status: source.status_code.as_u16(),
            message: source.message,
        },
        octocrab::Error::Serde { source, .. } => GitHubError::Decode { operation, source },
        octocrab::Error::Json { source, .. } => GitHubError::Decode {
            operation,
            source: source.into_inner(),
        },
        source => GitHubError::Client { operation, source },
    }
    .into()
}

async fn json<T: DeserializeOwned>(response: Response, operation: &'static str) -> Result<T> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|source| GitHubError::Http { operation, source })?;

    if !status.is_success() {
        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());

        return Err(GitHubError::Api {
            operation,
            status: status.as_u16(),
            message,
        }
        .into());
    }

    serde_json::from_slice(&body).map_err(|source| GitHubError::Decode { operation, source }.into())
}
