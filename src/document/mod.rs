//! Loading and saving YAML documents

pub mod editor;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// A decoded YAML tree: nested mappings, sequences and scalars. No schema
/// is enforced; any key may be absent.
pub type Document = serde_yaml::Value;

/// Reads documents from the source tree and writes snapshots under a
/// destination root, mirroring the source's relative layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentStore;

impl DocumentStore {
    /// Parse the YAML file at `path` into a document tree.
    pub fn load(&self, path: &Path) -> Result<Document> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize `document` to `dest_root/rel_path`, creating missing
    /// intermediate directories. Returns the path written.
    pub fn save(&self, dest_root: &Path, rel_path: &Path, document: &Document) -> Result<PathBuf> {
        let target = dest_root.join(rel_path);
        ensure_parent_dirs(&target)?;

        let content = serde_yaml::to_string(document).map_err(|source| Error::Encode {
            path: target.clone(),
            source,
        })?;

        debug!("writing {}", target.display());
        fs::write(&target, content).map_err(|source| Error::Write {
            path: target.clone(),
            source,
        })?;

        Ok(target)
    }
}

/// Create every missing directory leading to `target`. A path component
/// that exists as a regular file is a conflict, not an I/O error.
fn ensure_parent_dirs(target: &Path) -> Result<()> {
    let Some(parent) = target.parent() else {
        return Ok(());
    };

    let mut ancestors: Vec<&Path> = parent.ancestors().collect();
    ancestors.reverse();
    for ancestor in ancestors {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        if ancestor.exists() && !ancestor.is_dir() {
            return Err(Error::Conflict(ancestor.to_path_buf()));
        }
    }

    fs::create_dir_all(parent).map_err(|source| Error::Write {
        path: parent.to_path_buf(),
        source,
    })
}
