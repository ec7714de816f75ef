use std::io;

use thiserror::Error;

/// Library-wide error type for rebrand operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required environment variable is not set.
    #[error("Missing required environment variable {0}")]
    MissingEnv(&'static str),

    /// Slug violates the allowed format.
    #[error(
        "Invalid APP_SLUG '{0}': must be lowercase letters, digits, or hyphens, starting with a letter or digit"
    )]
    InvalidSlug(String),

    /// Product name is empty after trimming.
    #[error("APP_PRODUCT_NAME must not be empty")]
    EmptyProductName,

    /// An expected textual anchor is missing from a target file.
    ///
    /// Indicates the target file's structure has drifted from what the
    /// patch rules expect. `field` is the logical field that could not be
    /// located, not the raw pattern.
    #[error("Could not locate {field} in {path}")]
    PatternNotFound { field: &'static str, path: &'static str },

    /// Read or write failure on a target file.
    #[error("{path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The package manifest is not valid JSON.
    #[error("Failed to parse {path}: {source}")]
    ManifestParse {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
