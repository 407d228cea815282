//! Rule model and evaluation - matching, action pipelines, skip propagation

mod action;
mod engine;
mod pipeline;

pub use action::Action;
pub use engine::RuleEngine;
pub use pipeline::{ActionPipeline, Control, PipelineOutcome, StopReason};

use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Error, Result};

/// One match-predicate + action-list unit. Rules are evaluated in
/// declaration order; order is evaluation priority.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Human-readable description, used as the rule's report label.
    pub description: String,

    /// Path patterns. `None` means the rule always matches.
    pub matches: Option<Vec<Regex>>,

    /// Actions in declaration order.
    pub actions: Vec<Action>,
}

impl Rule {
    /// True when `matches` is absent, or when at least one pattern matches
    /// the document's relative path. Stops at the first matching pattern.
    pub fn matches_path(&self, rel_path: &str) -> bool {
        match &self.matches {
            None => true,
            Some(patterns) => patterns.iter().any(|pattern| pattern.is_match(rel_path)),
        }
    }

    pub(crate) fn from_raw(raw: RawRule) -> Result<Self> {
        let RawRule {
            description,
            matches,
            action,
            actions,
        } = raw;

        // The two legacy spellings are mutually exclusive.
        let mapping = match (action, actions) {
            (Some(_), Some(_)) => return Err(Error::MalformedRule { description }),
            (Some(single), None) => single,
            (None, Some(plural)) => plural,
            (None, None) => IndexMap::new(),
        };

        let mut resolved = Vec::with_capacity(mapping.len());
        for (name, params) in mapping {
            let parsed = Action::from_entry(&name, params).map_err(|source| Error::InvalidAction {
                description: description.clone(),
                action: name,
                source,
            })?;
            resolved.push(parsed);
        }

        let matches = match matches {
            None => None,
            Some(patterns) => {
                let mut compiled = Vec::with_capacity(patterns.len());
                for pattern in patterns {
                    compiled.push(Regex::new(&pattern).map_err(|source| Error::InvalidPattern {
                        description: description.clone(),
                        pattern,
                        source,
                    })?);
                }
                Some(compiled)
            }
        };

        Ok(Self {
            description,
            matches,
            actions: resolved,
        })
    }
}

/// Wire shape of a rule in the settings file. Accepts both legacy action
/// spellings (`action` singular, `actions` plural) and the original's
/// `match` key as an alias for `matches`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawRule {
    pub description: String,

    #[serde(default, alias = "match")]
    pub matches: Option<Vec<String>>,

    #[serde(default)]
    pub action: Option<IndexMap<String, Value>>,

    #[serde(default)]
    pub actions: Option<IndexMap<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(yaml: &str) -> RawRule {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_rule_without_matches_always_matches() {
        let rule = Rule::from_raw(raw("description: catch-all")).unwrap();

        assert!(rule.matches_path("anything.yml"));
        assert!(rule.matches_path("deep/nested/path.yml"));
    }

    #[test]
    fn test_match_is_a_disjunction() {
        let rule = Rule::from_raw(raw(
            "description: nodes\nmatches:\n  - ^node--\n  - ^media--",
        ))
        .unwrap();

        assert!(rule.matches_path("node--article.yml"));
        assert!(rule.matches_path("media--image.yml"));
        assert!(!rule.matches_path("user--admin.yml"));
    }

    #[test]
    fn test_legacy_match_alias() {
        let rule = Rule::from_raw(raw("description: legacy\nmatch:\n  - ^core\\.")).unwrap();

        assert!(rule.matches_path("core.extension.yml"));
        assert!(!rule.matches_path("system.site.yml"));
    }

    #[test]
    fn test_both_action_forms_rejected() {
        let err = Rule::from_raw(raw(
            "description: broken\naction:\n  skip: ~\nactions:\n  skip: ~",
        ))
        .unwrap_err();

        assert!(matches!(err, Error::MalformedRule { .. }));
    }

    #[test]
    fn test_singular_action_form_accepted() {
        let rule = Rule::from_raw(raw("description: old style\naction:\n  skip: ~")).unwrap();

        assert_eq!(rule.actions, vec![Action::Skip]);
    }

    #[test]
    fn test_actions_keep_declaration_order() {
        let rule = Rule::from_raw(raw(
            "description: ordered\nactions:\n  remove-props:\n    props: [a]\n  save:\n    dest: /out\n  skip: ~",
        ))
        .unwrap();

        assert_eq!(rule.actions.len(), 3);
        assert!(matches!(rule.actions[0], Action::RemoveProps { .. }));
        assert!(matches!(rule.actions[1], Action::Save { .. }));
        assert_eq!(rule.actions[2], Action::Skip);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Rule::from_raw(raw("description: bad\nmatches:\n  - '('")).unwrap_err();

        assert!(matches!(err, Error::InvalidPattern { .. }));
    }
}
