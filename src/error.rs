//! Error taxonomy for settings loading and document processing

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the core components.
///
/// Settings-shape errors (`SettingsNotFound`, `MalformedRule`,
/// `InvalidPattern`, `InvalidAction`) abort the whole run; document-level
/// I/O and decode errors are recorded in the report and the batch moves on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("settings file \"{0}\" does not exist")]
    SettingsNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize document for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("rule \"{description}\": \"action\" and \"actions\" can't be used together")]
    MalformedRule { description: String },

    #[error("rule \"{description}\": invalid pattern \"{pattern}\": {source}")]
    InvalidPattern {
        description: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule \"{description}\", action \"{action}\": {source}")]
    InvalidAction {
        description: String,
        action: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("document not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("\"{0}\" exists and is not a directory")]
    Conflict(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
