//! Snapshot of the ambient environment.
//!
//! Components never call `std::env` directly; the binary captures the
//! environment once and passes this snapshot down.

use std::collections::HashMap;

/// Environment variable holding the `owner/repo` of the running workflow
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
/// Environment variable holding the REST API base URL
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";
/// Environment variable naming the step output file
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
/// Set to `true` when running inside GitHub Actions
pub const GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";

/// Default REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Immutable view of environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    vars: HashMap<String, String>,
}

impl EnvConfig {
    /// Capture the current process environment
    pub fn from_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build from explicit pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a variable, treating empty values as unset
    pub fn get(&self, key: &str) -> Option<String> {
        self.vars
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
    }

    /// REST API base URL without a trailing slash
    pub fn api_url(&self) -> String {
        self.get(GITHUB_API_URL)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Whether the process runs as a GitHub Actions step
    pub fn is_github_actions(&self) -> bool {
        self.get(GITHUB_ACTIONS).as_deref() == Some("true")
    }
}
