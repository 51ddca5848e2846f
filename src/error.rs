//! Error types for release asset upload operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release asset upload operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all release asset upload operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Configuration and argument errors
    #[error("{0}")]
    Cli(#[from] CliError),

    /// GitHub API errors
    #[error("{0}")]
    GitHub(#[from] GitHubError),

    /// Asset publishing errors
    #[error("{0}")]
    Asset(#[from] AssetError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors, fatal for the run
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments or inputs
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required input
    #[error("Input required and not supplied: {argument}")]
    MissingArgument {
        /// Input name
        argument: String,
    },

    /// Repository override could not be split into owner and name
    #[error("Could not extract '{part}' from 'repo_name': {value}.")]
    MalformedRepository {
        /// Which half was missing ("owner" or "repo")
        part: &'static str,
        /// The offending override string
        value: String,
    },

    /// Invalid glob pattern for the `file` input
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Pattern as configured
        pattern: String,
        /// Reason reported by the glob parser
        reason: String,
    },
}

/// GitHub API errors
#[derive(Error, Debug)]
pub enum GitHubError {
    /// The API answered with a non-success status
    #[error("GitHub API error during {operation}: HTTP {status}: {message}")]
    Api {
        /// Operation that failed
        operation: &'static str,
        /// HTTP status code
        status: u16,
        /// Message returned by the API, or the raw body
        message: String,
    },

    /// Transport level failure
    #[error("GitHub request failed during {operation}: {source}")]
    Http {
        /// Operation that failed
        operation: &'static str,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// GitHub client failure that carries no API status
    #[error("GitHub client error during {operation}: {source}")]
    Client {
        /// Operation that failed
        operation: &'static str,
        /// Underlying octocrab error
        #[source]
        source: octocrab::Error,
    },

    /// The API answered successfully but the payload did not match the expected shape
    #[error("Unexpected GitHub response during {operation}: {source}")]
    Decode {
        /// Operation that failed
        operation: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Release upload endpoint could not be turned into a request URL
    #[error("Invalid upload URL '{url}': {reason}")]
    InvalidUploadUrl {
        /// Upload URL template returned by the API
        url: String,
        /// Reason for the error
        reason: String,
    },

    /// HTTP client could not be constructed
    #[error("Failed to initialize GitHub client: {reason}")]
    ClientInit {
        /// Reason for the error
        reason: String,
    },
}

/// Asset publishing failures, reported per asset
#[derive(Error, Debug)]
pub enum AssetError {
    /// Nothing to publish
    #[error("No matching files found.")]
    NoMatchingFiles,

    /// Same-named asset exists and overwrite is disabled
    #[error("Overwrite is false. Returning existing asset URL")]
    OverwriteDisabled {
        /// Published name of the colliding asset
        name: String,
        /// Download URL of the existing asset
        url: String,
    },

    /// Upload did not yield a download URL
    #[error("asset upload failed")]
    UploadFailed {
        /// Published name of the asset
        name: String,
    },

    /// Local file could not be read
    #[error("Failed to read asset file {path}: {source}")]
    ReadFailed {
        /// Path of the local file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl GitHubError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Api { status, .. } => Some(*status),
            GitHubError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Cli(CliError::MissingArgument { argument }) => vec![
                format!("Pass --{} on the command line", argument.replace('_', "-")),
                format!(
                    "Or set the INPUT_{} environment variable",
                    argument.to_uppercase()
                ),
            ],
            ReleaseError::Cli(CliError::MalformedRepository { .. }) => vec![
                "Use the form owner/repo for repo_name".to_string(),
                "Leave repo_name empty to target the repository running the workflow".to_string(),
            ],
            ReleaseError::GitHub(err) if matches!(err.status(), Some(401)) => vec![
                "Verify that repo_token is a valid GitHub token".to_string(),
            ],
            ReleaseError::GitHub(err) if matches!(err.status(), Some(403) | Some(404)) => vec![
                "Check that the token has contents: write permission on the repository".to_string(),
                "Verify the repository name and that the token can see it".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if this error is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ReleaseError::Cli(_))
    }
}
