use std::path::Path;
use std::thread;
use std::time::Duration;

use netlify_client::{Client, Site};
use tracing::debug;

use crate::CliResult;

const POLL_ATTEMPTS: u32 = 15;
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Deploy the contents of a folder to a site, then poll the deploy record
/// until the server reports it live.
pub fn invoke(
    client: &Client,
    folder: &Path,
    site_id: String,
    force_all: bool,
) -> CliResult<Option<String>> {
    let site = Site::from_id(site_id);
    let Some(deploy_id) = client.deploy_folder(folder, &site, force_all)? else {
        return Ok(Some("Nothing to deploy".to_string()));
    };

    if wait_until_ready(client, &deploy_id)? {
        let site = client.get_site(&site.id)?;
        Ok(Some(match site.url {
            Some(url) => format!("Deploy {deploy_id} is live at {url}"),
            None => format!("Deploy {deploy_id} is live"),
        }))
    } else {
        Ok(Some(format!(
            "Deploy {deploy_id} created but the site is not live yet"
        )))
    }
}

/// Fixed-count poll with no retry logic: the deploy either reports `ready`
/// within the attempt budget or the caller is told it is not live yet.
fn wait_until_ready(client: &Client, deploy_id: &str) -> CliResult<bool> {
    for attempt in 1..=POLL_ATTEMPTS {
        let deploy = client.get_deploy(deploy_id)?;
        if deploy.is_ready() {
            return Ok(true);
        }
        debug!(
            "Deploy {deploy_id} in state {} (attempt {attempt}/{POLL_ATTEMPTS})",
            deploy.state
        );
        thread::sleep(POLL_INTERVAL);
    }
    Ok(false)
}
