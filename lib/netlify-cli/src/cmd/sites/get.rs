use netlify_client::Client;

use crate::{CliResult, NetlifyCliError};

pub fn invoke(client: &Client, id_or_domain: &str) -> CliResult<Option<String>> {
    let site = client.get_site(id_or_domain)?;
    serde_json::to_string_pretty(&site)
        .map_err(NetlifyCliError::SerdeJson)
        .map(|s| Some(s))
}
