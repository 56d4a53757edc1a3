use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::hash::{Hash, Hasher};
use crate::{ManifestError, ManifestResult};

/// Mapping from server-relative file path to content digest for one deploy
/// folder.
///
/// Keys always begin with `/` and use forward slash separators regardless of
/// platform: a file at `{folder}/a/b.txt` is keyed as `/a/b.txt`. The folder
/// prefix is stripped exactly once from the left so a folder name that recurs
/// inside itself cannot corrupt the key.
///
/// An index from digest to every path holding that content is kept alongside
/// the mapping. Two files with identical bytes share a digest, and when the
/// server asks for that digest both paths need to be uploaded, so the inverse
/// lookup has to be multi-valued.
#[derive(Debug, Serialize)]
pub struct Manifest {
    files: IndexMap<String, Hash>,

    // digest -> every relative path with that content
    #[serde(skip)]
    idx: HashMap<Hash, Vec<String>>,
}

impl Manifest {
    /// Walk `folder` and hash every regular file under it.
    ///
    /// A symlink to a regular file is followed and hashed under the link's
    /// path; directories and special files are skipped. A folder with no
    /// regular files yields an empty manifest, which is a valid result. Any
    /// unreadable entry aborts the whole build; there is no partial manifest.
    pub fn from_path<P: AsRef<Path>>(folder: P) -> ManifestResult<Manifest> {
        let folder = folder.as_ref();
        if !folder.is_dir() {
            return Err(ManifestError::InvalidEntryPoint(folder.to_path_buf()));
        }

        let mut files = IndexMap::new();
        let mut idx: HashMap<Hash, Vec<String>> = HashMap::new();
        for entry in WalkDir::new(folder) {
            let entry = entry?;
            // follows symlinks, so a link to a regular file is included
            if !entry.path().is_file() {
                continue;
            }

            debug!("Preparing hash of {}", entry.path().display());
            let hash = hash_file(entry.path())?;
            let key = relative_key(folder, entry.path())?;
            idx.entry(hash).or_default().push(key.clone());
            files.insert(key, hash);
        }

        Ok(Manifest { files, idx })
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn files(&self) -> &IndexMap<String, Hash> {
        &self.files
    }

    /// Every relative path whose content hashes to `hash`. Empty if the
    /// digest does not appear in the manifest.
    pub fn paths_for(&self, hash: &Hash) -> &[String] {
        self.idx.get(hash).map(Vec::as_slice).unwrap_or_default()
    }
}

fn hash_file<P: AsRef<Path>>(path: P) -> ManifestResult<Hash> {
    let input = File::open(path)?;
    let mut reader = BufReader::new(input);

    let mut hasher = Hasher::new();
    let mut buffer = [0; 8192];

    loop {
        let count = reader.read(&mut buffer)?;
        if count == 0 {
            break;
        }
        hasher.update(&buffer[..count]);
    }

    Ok(hasher.finalize())
}

fn relative_key(folder: &Path, path: &Path) -> ManifestResult<String> {
    let rel = path.strip_prefix(folder)?;
    let mut key = String::new();
    for component in rel.components() {
        key.push('/');
        key.push_str(&component.as_os_str().to_string_lossy());
    }
    Ok(key)
}
