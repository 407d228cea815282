//! Confproc - rule-driven batch processor for YAML configuration files
//!
//! Walks a source directory of YAML documents and evaluates an ordered
//! rule list against each one. Matching rules run ordered actions that
//! strip top-level properties, snapshot the working document under a
//! destination root, or skip the rest of the document's processing.
//! Every decision is collected into a hierarchical report
//! (run → file → rule → action).

pub mod discovery;
pub mod document;
pub mod error;
pub mod report;
pub mod rules;
pub mod runner;
pub mod settings;

pub use document::{Document, DocumentStore};
pub use error::{Error, Result};
pub use report::{LogReporter, Reporter, RunReport};
pub use rules::{Action, ActionPipeline, Rule, RuleEngine};
pub use runner::BatchRunner;
pub use settings::Settings;

/// Current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
