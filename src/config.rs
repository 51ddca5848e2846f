//! Upload configuration built once from the command line and environment inputs.

use crate::cli::Args;
use crate::error::{CliError, Result};

/// Fully validated configuration for one upload run
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// GitHub token
    pub repo_token: String,
    /// Literal path or glob pattern of the files to publish
    pub file: String,
    /// Tag with any `refs/tags/` or `refs/heads/` prefix removed
    pub tag: String,
    /// Optional `owner/repo` override
    pub repo_name: Option<String>,
    /// Expand `file` as a glob pattern
    pub glob_on: bool,
    /// Replace existing assets with the same name
    pub overwrite: bool,
    /// Mark a newly created release as prerelease
    pub prerelease: bool,
    /// Name of a newly created release
    pub release_name: Option<String>,
    /// Body of a newly created release
    pub body: Option<String>,
    /// Title used in the default release body
    pub title: String,
    /// Published name template for literal mode (`$tag` is substituted)
    pub asset_name: Option<String>,
}

impl UploadConfig {
    /// Validate parsed arguments into a configuration
    pub fn from_args(args: &Args) -> Result<Self> {
        let repo_token = required(&args.repo_token, "repo_token")?;
        let file = required(&args.file, "file")?;
        let tag = normalize_tag(&required(&args.tag, "tag")?);
        let title = release_title(args.title.as_deref(), &tag);

        Ok(Self {
            repo_token,
            file,
            title,
            repo_name: optional(&args.repo_name),
            glob_on: flag(&args.glob_on),
            overwrite: flag(&args.overwrite),
            prerelease: flag(&args.prerelease),
            release_name: optional(&args.release_name),
            body: optional(&args.body),
            asset_name: optional(&args.asset_name),
            tag,
        })
    }
}

fn required(value: &Option<String>, name: &str) -> Result<String> {
    optional(value).ok_or_else(|| {
        CliError::MissingArgument {
            argument: name.to_string(),
        }
        .into()
    })
}

fn optional(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn flag(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}

/// Strip a leading `refs/tags/` or `refs/heads/` from a ref name.
///
/// Only one prefix is removed; `refs/tags/refs/heads/x` keeps `refs/heads/x`.
pub fn normalize_tag(tag: &str) -> String {
    tag.strip_prefix("refs/tags/")
        .or_else(|| tag.strip_prefix("refs/heads/"))
        .unwrap_or(tag)
        .to_string()
}

/// Configured title, falling back to the tag
pub fn release_title(title: Option<&str>, tag: &str) -> String {
    match title {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => tag.to_string(),
    }
}
