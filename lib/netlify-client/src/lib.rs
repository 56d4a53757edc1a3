//! Blocking client for the Netlify REST API.
//!
//! Covers site CRUD, deploy-record reads and the content-addressed
//! incremental deploy protocol: hash every file in a folder, ask the server
//! which digests it is missing, upload only those files.

use reqwest::StatusCode;
use thiserror::Error;

mod client;
mod deploy;
mod models;

pub use client::{Client, ClientBuilder, DEFAULT_HOST};
pub use models::{DEPLOY_STATE_READY, Deploy, Site, SiteProperties};

/// Errors returned by the client
#[remain::sorted]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Generic HTTP Error: any non-success response status, carrying the
    /// response body as the message.
    #[error("HTTP Error. Code: {status}, message: {error}")]
    HttpError { status: StatusCode, error: String },

    /// Error that may occur while I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("manifest error: {0}")]
    ManifestError(#[from] manifest::ManifestError),

    /// Errors returned by reqwest
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// Serde JSON parsing error
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    /// URL Parsing Error
    #[error(transparent)]
    UrlParserError(#[from] url::ParseError),
}

pub type ClientResult<T> = Result<T, ClientError>;
