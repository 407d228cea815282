//! Settings loading and validation

mod schema;

pub use schema::Settings;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::rules::Rule;
use schema::RawSettings;

/// Settings filename looked up in the working directory when no path is
/// given on the command line.
pub const DEFAULT_SETTINGS_FILENAME: &str = "confproc.settings.yml";

impl Settings {
    /// Load and validate settings from a YAML file. Rule shapes and match
    /// patterns are checked here, before any document is touched, so a
    /// malformed rule aborts the run with nothing written.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SettingsNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawSettings = serde_yaml::from_str(&content).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rules = raw
            .rules
            .into_iter()
            .map(Rule::from_raw)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source_dir: raw.source_dir,
            rules,
        })
    }

    /// Default settings location: `confproc.settings.yml` in the current
    /// directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_SETTINGS_FILENAME)
    }
}
