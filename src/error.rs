use crate::types::registry::PackageRecord;
use std::path::PathBuf;

/// Everything that can stop a bump.
///
/// The first three variants are validation failures that happen before any
/// file is written; the rest abort the run wherever they occur.
#[derive(thiserror::Error, Debug)]
pub enum BumpError {
    #[error("missing <plugin-name> or <bump-type>")]
    Usage,

    #[error("Invalid bump type \"{value}\". Must be one of: {allowed}")]
    InvalidBumpKind { value: String, allowed: String },

    #[error("Plugin \"{name}\" not found.")]
    RecordNotFound {
        name: String,
        available: Vec<PackageRecord>,
    },

    #[error("Invalid semver format: {version}")]
    MalformedVersion { version: String },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: {reason}", path.display())]
    InvalidDocument { path: PathBuf, reason: String },
}

impl BumpError {
    /// Validation failures are reported by the caller and mapped to exit code 1.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BumpError::Usage | BumpError::InvalidBumpKind { .. } | BumpError::RecordNotFound { .. }
        )
    }
}
