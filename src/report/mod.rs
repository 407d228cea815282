//! Hierarchical run reports and the sinks that render them
//!
//! Reports are append-only observability data: run → file → rule → action.
//! They never feed back into control flow.

use std::path::PathBuf;
use tracing::info;

use crate::document::editor::PropRemoval;

const INDENT: &str = "  ";

/// Summary of one batch run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub source_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn files_processed(&self) -> usize {
        self.files.len()
    }

    /// True when any document failed to load or any of its saves failed.
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(FileReport::has_errors)
    }

    /// Flatten the hierarchy into indented report lines.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Analysing {} files from \"{}\" directory",
            self.files.len(),
            self.source_dir.display()
        )];
        for file in &self.files {
            file.render_into(&mut lines);
        }
        lines
    }
}

/// Everything that happened to one document.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path relative to the source root.
    pub path: PathBuf,

    /// One entry per evaluated rule, in evaluation order. Rules behind a
    /// terminating pipeline have no entry at all.
    pub rules: Vec<RuleReport>,

    /// Set when the document could not be loaded in the first place.
    pub error: Option<String>,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        self.error.is_some() || self.rules.iter().any(RuleReport::has_errors)
    }

    fn render_into(&self, lines: &mut Vec<String>) {
        lines.push(format!("file : {}", self.path.display()));
        if let Some(error) = &self.error {
            lines.push(format!("{INDENT}[Failed to load: {error}]"));
            return;
        }
        for rule in &self.rules {
            rule.render_into(lines);
        }
    }
}

/// One rule's outcome for one document.
#[derive(Debug, Clone)]
pub struct RuleReport {
    pub description: String,
    pub outcome: RuleOutcome,
}

#[derive(Debug, Clone)]
pub enum RuleOutcome {
    Matched { actions: Vec<ActionReport> },
    NoMatch,
}

impl RuleReport {
    pub fn has_errors(&self) -> bool {
        match &self.outcome {
            RuleOutcome::Matched { actions } => actions.iter().any(|action| {
                matches!(
                    action,
                    ActionReport::Save {
                        outcome: SaveOutcome::Failed(_)
                    }
                )
            }),
            RuleOutcome::NoMatch => false,
        }
    }

    fn render_into(&self, lines: &mut Vec<String>) {
        match &self.outcome {
            RuleOutcome::NoMatch => {
                lines.push(format!("{INDENT}X No match rule \"{}\"", self.description));
            }
            RuleOutcome::Matched { actions } => {
                lines.push(format!("{INDENT}! Match rule \"{}\"", self.description));
                for action in actions {
                    action.render_into(lines);
                }
            }
        }
    }
}

/// One action's outcome, in pipeline order.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionReport {
    Skip,
    RemoveProps { removals: Vec<PropRemoval> },
    Save { outcome: SaveOutcome },
    Unknown { name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Absolute path written.
    Written(PathBuf),
    Failed(String),
}

impl ActionReport {
    fn render_into(&self, lines: &mut Vec<String>) {
        let indent2 = INDENT.repeat(2);
        let indent3 = INDENT.repeat(3);
        match self {
            ActionReport::Skip => {
                lines.push(format!("{indent2}- Action = skip"));
                lines.push(format!(
                    "{indent3}[Break next actions and skip to next file]"
                ));
            }
            ActionReport::RemoveProps { removals } => {
                lines.push(format!("{indent2}- Action = remove-props"));
                for removal in removals {
                    let found = if removal.found { "found" } else { "not found" };
                    lines.push(format!(
                        "{indent3}- Remove property {} : {found}",
                        removal.name
                    ));
                }
            }
            ActionReport::Save { outcome } => {
                lines.push(format!("{indent2}- Action = save"));
                match outcome {
                    SaveOutcome::Written(path) => {
                        lines.push(format!("{indent3}- save \"{}\"", path.display()));
                    }
                    SaveOutcome::Failed(message) => {
                        lines.push(format!("{indent3}- save failed: {message}"));
                    }
                }
            }
            ActionReport::Unknown { name } => {
                lines.push(format!("{indent2}- Action = {name}"));
                lines.push(format!("{indent3}[Unknown action \"{name}\"]"));
            }
        }
    }
}

/// Sink for finished run reports. The engine only builds report data;
/// rendering lives behind this trait.
pub trait Reporter {
    fn emit(&self, report: &RunReport);
}

/// Renders the report through the tracing log, one line per entry.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn emit(&self, report: &RunReport) {
        for line in report.render_lines() {
            info!("{line}");
        }
    }
}
