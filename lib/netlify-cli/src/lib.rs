pub mod cmd;
pub mod settings;

use thiserror::Error;

#[remain::sorted]
#[derive(Error, Debug)]
pub enum NetlifyCliError {
    #[error("client error: {0}")]
    ClientError(#[from] netlify_client::ClientError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "No authentication token. Pass --auth-token, set NETLIFY_AUTH_TOKEN or add auth_token to the settings file"
    )]
    MissingAuthToken,

    #[error("json serialize/deserialize error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Errors that may occur when deserializing types from TOML format.
    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

pub type CliResult<T> = Result<T, NetlifyCliError>;
