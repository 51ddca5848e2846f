//! Expansion of the `file` input into the assets to publish

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

/// Placeholder replaced by the tag in asset name templates
pub const TAG_PLACEHOLDER: &str = "$tag";

/// Local file and the name it is published under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Path of the local file
    pub source: PathBuf,
    /// Asset name on the release
    pub name: String,
}

/// Expand `file` into assets.
///
/// With `glob_on` every match becomes an asset named after its base name,
/// in the order the glob walk yields them. Otherwise `file` is a single path
/// whose published name comes from `asset_name` (with `$tag` substituted) or,
/// when no template is set, from its base name. Existence is not checked here.
pub fn expand_assets(
    tag: &str,
    file: &str,
    glob_on: bool,
    asset_name: Option<&str>,
) -> Result<Vec<Asset>> {
    if glob_on {
        return expand_glob(file);
    }

    let name = match asset_name {
        Some(template) if !template.is_empty() => template.replace(TAG_PLACEHOLDER, tag),
        _ => base_name(Path::new(file)),
    };

    Ok(vec![Asset {
        source: PathBuf::from(file),
        name,
    }])
}

fn expand_glob(pattern: &str) -> Result<Vec<Asset>> {
    let paths = glob::glob(pattern).map_err(|e| CliError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let mut assets = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => assets.push(Asset {
                name: base_name(&path),
                source: path,
            }),
            Err(e) => log::warn!("Skipping unreadable path {}: {}", e.path().display(), e.error()),
        }
    }

    log::debug!("Pattern {} matched {} path(s).", pattern, assets.len());
    Ok(assets)
}

/// Final path component, or the whole path when it has none (e.g. `..`)
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
