//! Batch runner - sequential execution over discovered documents

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::document::DocumentStore;
use crate::report::{FileReport, Reporter, RunReport};
use crate::rules::RuleEngine;
use crate::settings::Settings;

/// Drives one run: loads each discovered document, evaluates the rule list
/// against it and aggregates the hierarchical report. Processing is
/// strictly sequential; one document's failure does not stop the batch.
pub struct BatchRunner<'a> {
    settings: &'a Settings,
    store: DocumentStore,
    reporter: &'a dyn Reporter,
}

impl<'a> BatchRunner<'a> {
    pub fn new(settings: &'a Settings, reporter: &'a dyn Reporter) -> Self {
        Self {
            settings,
            store: DocumentStore,
            reporter,
        }
    }

    /// Process `documents` (absolute path, path relative to the source
    /// root) in the order given. The finished report goes to the reporter
    /// sink and is returned to the caller.
    pub fn run(&self, documents: &[(PathBuf, PathBuf)]) -> RunReport {
        let engine = RuleEngine::new(&self.settings.rules, &self.store);
        let mut report = RunReport {
            source_dir: self.settings.source_dir.clone(),
            files: Vec::with_capacity(documents.len()),
        };

        for (abs_path, rel_path) in documents {
            debug!("processing {}", rel_path.display());
            report
                .files
                .push(self.process_document(&engine, abs_path, rel_path));
        }

        self.reporter.emit(&report);
        report
    }

    fn process_document(
        &self,
        engine: &RuleEngine,
        abs_path: &Path,
        rel_path: &Path,
    ) -> FileReport {
        let document = match self.store.load(abs_path) {
            Ok(document) => document,
            Err(err) => {
                warn!("could not load {}: {err}", abs_path.display());
                return FileReport {
                    path: rel_path.to_path_buf(),
                    rules: Vec::new(),
                    error: Some(err.to_string()),
                };
            }
        };

        let (_document, rules) = engine.evaluate(rel_path, document);
        FileReport {
            path: rel_path.to_path_buf(),
            rules,
            error: None,
        }
    }
}
