//! Content manifests for incremental deploys.
//!
//! A [`Manifest`] maps every regular file under a deploy folder to the SHA-1
//! digest of its raw bytes. The hosting API diffs the submitted mapping
//! against what it already has stored and answers with the subset of digests
//! it still needs uploaded.

use std::path::PathBuf;

use thiserror::Error;

mod builder;
mod hash;

pub use builder::Manifest;
pub use hash::{Hash, HashParseError, Hasher};

#[remain::sorted]
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Error that occurs when the deploy folder is missing or not a directory.
    #[error("invalid manifest entry point. {0} must be a directory")]
    InvalidEntryPoint(PathBuf),

    /// Error that may occur while I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("path is outside the manifest folder: {0}")]
    StripPrefixError(#[from] std::path::StripPrefixError),

    #[error("walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

pub type ManifestResult<T> = Result<T, ManifestError>;
