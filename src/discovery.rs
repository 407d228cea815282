//! Recursive enumeration of eligible documents under the source root

use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension a file must carry to be picked up.
const DOCUMENT_EXTENSION: &str = "yml";

/// Walk `root` recursively and return `(absolute, relative-to-root)` pairs
/// for every `.yml` file, in a stable name-sorted order.
pub fn discover_documents(root: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    if !root.is_dir() {
        return Err(Error::NotFound(root.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            let source = err
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("directory walk failed"));
            Error::Read { path, source }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
            continue;
        }
        let Ok(rel_path) = path.strip_prefix(root) else {
            continue;
        };
        trace!("discovered {}", rel_path.display());
        documents.push((path.clone(), rel_path.to_path_buf()));
    }

    Ok(documents)
}
