use netlify_client::{Client, Site};

use crate::CliResult;

pub fn invoke(client: &Client, site_id: &str) -> CliResult<Option<String>> {
    client.delete_site(&Site::from_id(site_id))?;
    Ok(Some(format!("Deleted site {site_id}")))
}
