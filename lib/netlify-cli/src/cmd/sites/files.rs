use netlify_client::{Client, Site};

use crate::{CliResult, NetlifyCliError};

pub fn invoke(client: &Client, site_id: &str) -> CliResult<Option<String>> {
    let files = client.site_files(&Site::from_id(site_id))?;
    serde_json::to_string_pretty(&files)
        .map_err(NetlifyCliError::SerdeJson)
        .map(|s| Some(s))
}
