use netlify_client::Client;
use tracing::debug;

use crate::CliResult;

pub fn invoke(client: &Client) -> CliResult<Option<String>> {
    let sites = client.sites()?;
    for site in &sites {
        debug!("Deleting site {}", site.id);
        client.delete_site(site)?;
    }
    Ok(Some(format!("Deleted {} sites", sites.len())))
}
