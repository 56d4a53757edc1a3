use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{CliResult, NetlifyCliError};

pub const DEFAULT_CONFIG_NAME: &str = "netlifyctl.toml";

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    pub auth_token: Option<String>,
}

/// Load settings from an explicit path if given, otherwise the first of
/// `netlifyctl.toml` in the cwd or the platform config directory that
/// exists. No settings file at all yields defaults.
pub fn load(path: Option<&Path>) -> CliResult<Settings> {
    if let Some(path) = path {
        return read_settings(path);
    }

    for candidate in default_paths() {
        if candidate.exists() {
            return read_settings(&candidate);
        }
    }

    Ok(Settings::default())
}

/// Resolve the auth token: an explicit flag or env value wins over the
/// settings file. No token anywhere is an error; nothing works without one.
pub fn resolve_auth_token(explicit: Option<String>, settings: &Settings) -> CliResult<String> {
    explicit
        .or_else(|| settings.auth_token.clone())
        .ok_or(NetlifyCliError::MissingAuthToken)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_NAME)];
    if let Some(dirs) = ProjectDirs::from("com", "netlifyctl", "netlifyctl") {
        paths.push(dirs.config_dir().join(DEFAULT_CONFIG_NAME));
    }
    paths
}

fn read_settings(path: &Path) -> CliResult<Settings> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
