//! Settings schema

use serde::Deserialize;
use std::path::PathBuf;

use crate::rules::{RawRule, Rule};

/// Validated settings for one run: the source root and the ordered rules.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the source YAML documents.
    pub source_dir: PathBuf,

    /// Rules in evaluation order.
    pub rules: Vec<Rule>,
}

/// Wire shape of the settings document. Key names follow the original
/// settings format (`source-dir`, `rules`).
#[derive(Debug, Deserialize)]
pub(crate) struct RawSettings {
    #[serde(rename = "source-dir")]
    pub source_dir: PathBuf,

    #[serde(default)]
    pub rules: Vec<RawRule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Action;

    #[test]
    fn test_parse_minimal_settings() {
        let raw: RawSettings = serde_yaml::from_str("source-dir: /configs").unwrap();

        assert_eq!(raw.source_dir, PathBuf::from("/configs"));
        assert!(raw.rules.is_empty());
    }

    #[test]
    fn test_parse_full_settings() {
        let yaml = r#"
source-dir: /configs
rules:
  - description: Strip site noise
    match:
      - '^system\.'
    actions:
      remove-props:
        props: [uuid, _core]
      save:
        dest: /out
  - description: Skip everything else
    actions:
      skip: ~
"#;
        let raw: RawSettings = serde_yaml::from_str(yaml).unwrap();
        let rules: Vec<Rule> = raw
            .rules
            .into_iter()
            .map(|rule| Rule::from_raw(rule).unwrap())
            .collect();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].description, "Strip site noise");
        assert_eq!(rules[0].actions.len(), 2);
        assert_eq!(rules[1].actions, vec![Action::Skip]);
    }
}
