//! Target repository resolution (ambient workflow repository or owner/repo override)

use crate::EnvConfig;
use crate::env_config::GITHUB_REPOSITORY;
use crate::error::{CliError, Result};
use std::fmt;

/// Owner and name of the repository holding the release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCoordinates {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepositoryCoordinates {
    /// Split an `owner/repo` string on its first slash.
    ///
    /// Everything after the first slash belongs to the name, so `a/b/c`
    /// yields owner `a` and name `b/c`.
    pub fn parse(value: &str) -> Result<Self> {
        let (owner, name) = value.split_once('/').unwrap_or(("", value));

        if owner.is_empty() {
            return Err(CliError::MalformedRepository {
                part: "owner",
                value: value.to_string(),
            }
            .into());
        }
        if name.is_empty() {
            return Err(CliError::MalformedRepository {
                part: "repo",
                value: value.to_string(),
            }
            .into());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositoryCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Resolve the repository to operate on.
///
/// Without an override the repository running the workflow is used.
pub fn resolve_repository(
    repo_override: Option<&str>,
    env: &EnvConfig,
) -> Result<RepositoryCoordinates> {
    if let Some(value) = repo_override.filter(|v| !v.is_empty()) {
        return RepositoryCoordinates::parse(value);
    }

    let ambient = env.get(GITHUB_REPOSITORY).ok_or_else(|| CliError::InvalidArguments {
        reason: format!(
            "{} is not set; pass repo_name to choose the target repository",
            GITHUB_REPOSITORY
        ),
    })?;

    RepositoryCoordinates::parse(&ambient).map_err(|_| {
        CliError::InvalidArguments {
            reason: format!("{} has unexpected value '{}'", GITHUB_REPOSITORY, ambient),
        }
        .into()
    })
}
