//! The incremental deploy negotiator.
//!
//! A deploy submits the folder's path→digest manifest, receives back a deploy
//! id plus the set of digests the server is missing, and uploads exactly the
//! files behind those digests. Uploads run sequentially in the order the
//! server listed the digests; the first failure aborts the deploy.

use std::fs;
use std::path::Path;

use manifest::Manifest;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::ClientResult;
use crate::client::{Client, support};
use crate::models::{CreateDeployRequest, Deploy, Site};

impl Client {
    /// Deploy the contents of `folder` to `site`.
    ///
    /// Returns the deploy id, or `None` when the folder holds no regular
    /// files, in which case no network call is made at all. `force_all`
    /// uploads every file regardless of what the server reports it already
    /// has.
    pub fn deploy_folder(
        &self,
        folder: &Path,
        site: &Site,
        force_all: bool,
    ) -> ClientResult<Option<String>> {
        let manifest = Manifest::from_path(folder)?;
        self.deploy_manifest(folder, &manifest, site, force_all)
    }

    /// Negotiate a deploy for an already-built manifest.
    pub fn deploy_manifest(
        &self,
        folder: &Path,
        manifest: &Manifest,
        site: &Site,
        force_all: bool,
    ) -> ClientResult<Option<String>> {
        if manifest.is_empty() {
            debug!("Nothing under the deploy folder, skipping deploy");
            return Ok(None);
        }

        debug!(
            "Requesting required hashes for {} files under {}",
            manifest.len(),
            folder.display()
        );
        let deploy: Deploy = self.post(
            &["sites", &site.id, "deploys"],
            &CreateDeployRequest {
                files: manifest.files(),
            },
            &[StatusCode::OK, StatusCode::CREATED],
        )?;
        debug!("Required filehashes: {:?}", deploy.required);

        let uploads: Vec<&String> = if force_all {
            manifest.files().keys().collect()
        } else {
            // Multi-valued digest lookup: every path sharing a required
            // digest gets uploaded, not just the first one found.
            let mut paths = Vec::new();
            for hash in &deploy.required {
                let known = manifest.paths_for(hash);
                if known.is_empty() {
                    warn!("Server requires hash {hash} which maps to no local file");
                    continue;
                }
                paths.extend(known);
            }
            paths
        };

        for rel in uploads {
            self.upload_file(folder, &deploy.id, rel)?;
        }

        Ok(Some(deploy.id))
    }

    fn upload_file(&self, folder: &Path, deploy_id: &str, rel: &str) -> ClientResult<()> {
        // Manifest keys carry a leading separator; the filesystem path and
        // the upload URL both want the path relative to the folder root.
        let rel = rel.trim_start_matches('/');
        let path = folder.join(rel);
        debug!("Uploading {} for deploy {deploy_id}", path.display());

        let contents = fs::read(&path)?;
        let url = self.url(&["deploys", deploy_id, "files", &support::encode_path(rel)])?;
        self.put_raw(url, contents, &[StatusCode::OK])
    }
}
