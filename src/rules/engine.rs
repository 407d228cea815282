//! Rule engine - evaluates the ordered rule list against one document

use std::path::Path;
use tracing::{debug, trace};

use super::{ActionPipeline, Control, Rule};
use crate::document::{Document, DocumentStore};
use crate::report::{RuleOutcome, RuleReport};

/// Evaluates an ordered rule list against one document, threading the
/// mutated document forward across matching rules.
pub struct RuleEngine<'a> {
    rules: &'a [Rule],
    store: &'a DocumentStore,
}

impl<'a> RuleEngine<'a> {
    pub fn new(rules: &'a [Rule], store: &'a DocumentStore) -> Self {
        Self { rules, store }
    }

    /// Run every rule in order against `document`, identified by its path
    /// relative to the source root. Mutations from an earlier matching
    /// rule are visible to later rules; the document is never reloaded.
    /// A terminating pipeline stops all remaining rules, not just the
    /// current rule's actions.
    pub fn evaluate(&self, rel_path: &Path, document: Document) -> (Document, Vec<RuleReport>) {
        let mut document = document;
        let mut reports = Vec::with_capacity(self.rules.len());
        let path_str = rel_path.to_string_lossy();

        for rule in self.rules {
            if !rule.matches_path(&path_str) {
                trace!("rule '{}' did not match {}", rule.description, path_str);
                reports.push(RuleReport {
                    description: rule.description.clone(),
                    outcome: RuleOutcome::NoMatch,
                });
                continue;
            }

            debug!("rule '{}' matched {}", rule.description, path_str);
            let outcome = ActionPipeline::new(self.store).run(&rule.actions, rel_path, document);
            document = outcome.document;
            reports.push(RuleReport {
                description: rule.description.clone(),
                outcome: RuleOutcome::Matched {
                    actions: outcome.actions,
                },
            });

            if let Control::Terminate(reason) = outcome.control {
                debug!(
                    "rule '{}' stopped processing of {} ({reason:?})",
                    rule.description, path_str
                );
                break;
            }
        }

        (document, reports)
    }
}
