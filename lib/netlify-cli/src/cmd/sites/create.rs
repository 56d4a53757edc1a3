use netlify_client::{Client, SiteProperties};

use crate::{CliResult, NetlifyCliError};

pub fn invoke(
    client: &Client,
    name: Option<String>,
    custom_domain: Option<String>,
) -> CliResult<Option<String>> {
    let site = client.create_site(&SiteProperties {
        name,
        custom_domain,
    })?;
    serde_json::to_string_pretty(&site)
        .map_err(NetlifyCliError::SerdeJson)
        .map(|s| Some(s))
}
