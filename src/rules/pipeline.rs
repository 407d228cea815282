//! Action pipeline - ordered execution of a matched rule's actions

use std::path::Path;
use tracing::{debug, warn};

use super::Action;
use crate::document::{Document, DocumentStore, editor};
use crate::report::{ActionReport, SaveOutcome};

/// Control signal returned by the pipeline and interpreted once by the
/// rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep evaluating the remaining rules for this document.
    Continue,
    /// Stop evaluating the remaining rules for this document.
    Terminate(StopReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A `skip` action ran.
    Skip,
    /// A save failed; the document's remaining processing is abandoned.
    SaveFailed,
}

/// Result of running one rule's actions: the possibly-mutated document,
/// the continuation signal, and the per-action report entries.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub document: Document,
    pub control: Control,
    pub actions: Vec<ActionReport>,
}

/// Executes a rule's actions strictly in declaration order against one
/// working document.
pub struct ActionPipeline<'a> {
    store: &'a DocumentStore,
}

impl<'a> ActionPipeline<'a> {
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Run `actions` against `document`. `skip` terminates immediately;
    /// `remove-props` replaces the working document; `save` writes the
    /// current working document and continues. Every action outcome is
    /// appended to the report, whichever branch it took.
    pub fn run(&self, actions: &[Action], rel_path: &Path, document: Document) -> PipelineOutcome {
        let mut document = document;
        let mut reports = Vec::with_capacity(actions.len());
        let mut control = Control::Continue;

        for action in actions {
            debug!(
                "action '{}' on {}",
                action.name(),
                rel_path.display()
            );
            match action {
                Action::Skip => {
                    reports.push(ActionReport::Skip);
                    control = Control::Terminate(StopReason::Skip);
                }
                Action::RemoveProps { props } => {
                    let (edited, removals) = editor::remove_properties(document, props);
                    document = edited;
                    reports.push(ActionReport::RemoveProps { removals });
                }
                Action::Save { dest } => {
                    let outcome = match self.store.save(dest, rel_path, &document) {
                        Ok(target) => SaveOutcome::Written(target),
                        Err(err) => {
                            warn!("save of {} failed: {err}", rel_path.display());
                            control = Control::Terminate(StopReason::SaveFailed);
                            SaveOutcome::Failed(err.to_string())
                        }
                    };
                    reports.push(ActionReport::Save { outcome });
                }
                Action::Unknown { name } => {
                    reports.push(ActionReport::Unknown { name: name.clone() });
                }
            }

            if control != Control::Continue {
                break;
            }
        }

        PipelineOutcome {
            document,
            control,
            actions: reports,
        }
    }
}
