use std::fs;
use std::io;
use std::path::Path;

/// Materialize a set of `(relative path, contents)` pairs under `root`,
/// creating intermediate directories as needed.
pub fn file_tree(root: &Path, files: &[(&str, &[u8])]) -> io::Result<()> {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
    }
    Ok(())
}
