use netlify_client::Client;

use crate::{CliResult, NetlifyCliError};

pub fn invoke(client: &Client) -> CliResult<Option<String>> {
    let sites = client.sites()?;
    serde_json::to_string_pretty(&sites)
        .map_err(NetlifyCliError::SerdeJson)
        .map(|s| Some(s))
}
