//! Actions a matched rule runs against a document

use serde::Deserialize;
use serde_yaml::Value;
use std::path::PathBuf;

/// One named operation from a rule's ordered action mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Stop processing this document entirely: remaining actions in the
    /// rule and all remaining rules.
    Skip,

    /// Remove top-level properties from the working document.
    RemoveProps { props: Vec<String> },

    /// Write the current working document under a destination root,
    /// mirroring the source's relative layout.
    Save { dest: PathBuf },

    /// Unrecognized action name. Recorded in the report, otherwise a no-op.
    Unknown { name: String },
}

#[derive(Debug, Deserialize)]
struct RemovePropsParams {
    props: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SaveParams {
    dest: PathBuf,
}

impl Action {
    /// Build an action from one `(name, params)` entry of a rule's action
    /// mapping. `skip` ignores its parameters; unrecognized names are kept
    /// as [`Action::Unknown`].
    pub fn from_entry(name: &str, params: Value) -> Result<Self, serde_yaml::Error> {
        match name {
            "skip" => Ok(Action::Skip),
            "remove-props" => {
                let params: RemovePropsParams = serde_yaml::from_value(params)?;
                Ok(Action::RemoveProps {
                    props: params.props,
                })
            }
            "save" => {
                let params: SaveParams = serde_yaml::from_value(params)?;
                Ok(Action::Save { dest: params.dest })
            }
            other => Ok(Action::Unknown {
                name: other.to_string(),
            }),
        }
    }

    /// Name of the action as written in the settings file.
    pub fn name(&self) -> &str {
        match self {
            Action::Skip => "skip",
            Action::RemoveProps { .. } => "remove-props",
            Action::Save { .. } => "save",
            Action::Unknown { name } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_ignores_parameters() {
        let params: Value = serde_yaml::from_str("whatever: true").unwrap();
        assert_eq!(Action::from_entry("skip", params).unwrap(), Action::Skip);
    }

    #[test]
    fn test_remove_props_parses_ordered_names() {
        let params: Value = serde_yaml::from_str("props: [uuid, _core]").unwrap();
        let action = Action::from_entry("remove-props", params).unwrap();

        assert_eq!(
            action,
            Action::RemoveProps {
                props: vec!["uuid".into(), "_core".into()]
            }
        );
    }

    #[test]
    fn test_remove_props_requires_props() {
        let params: Value = serde_yaml::from_str("nope: []").unwrap();
        assert!(Action::from_entry("remove-props", params).is_err());
    }

    #[test]
    fn test_save_parses_destination() {
        let params: Value = serde_yaml::from_str("dest: /tmp/out").unwrap();
        let action = Action::from_entry("save", params).unwrap();

        assert_eq!(
            action,
            Action::Save {
                dest: PathBuf::from("/tmp/out")
            }
        );
    }

    #[test]
    fn test_unknown_name_is_kept() {
        let action = Action::from_entry("frobnicate", Value::Null).unwrap();
        assert_eq!(
            action,
            Action::Unknown {
                name: "frobnicate".into()
            }
        );
        assert_eq!(action.name(), "frobnicate");
    }
}
