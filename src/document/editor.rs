//! Top-level property removal

use serde_yaml::Value;

use super::Document;

/// Outcome of removing one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropRemoval {
    pub name: String,
    pub found: bool,
}

/// Remove the named top-level properties from `document`, in order,
/// reporting whether each was present. Only direct children of the root
/// mapping are considered; there is no traversal into nested structures.
/// A non-mapping document yields "not found" for every name.
pub fn remove_properties(
    mut document: Document,
    props: &[String],
) -> (Document, Vec<PropRemoval>) {
    let mut removals = Vec::with_capacity(props.len());
    for name in props {
        let found = match document {
            Value::Mapping(ref mut mapping) => mapping.remove(name.as_str()).is_some(),
            _ => false,
        };
        removals.push(PropRemoval {
            name: name.clone(),
            found,
        });
    }
    (document, removals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Document {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn props(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_removes_present_and_reports_absent() {
        let (edited, removals) = remove_properties(doc("a: 1\nb: 2"), &props(&["a", "missing"]));

        assert_eq!(edited, doc("b: 2"));
        assert_eq!(
            removals,
            vec![
                PropRemoval {
                    name: "a".into(),
                    found: true
                },
                PropRemoval {
                    name: "missing".into(),
                    found: false
                },
            ]
        );
    }

    #[test]
    fn test_idempotent_second_removal() {
        let (edited, first) = remove_properties(doc("a: 1\nb: 2"), &props(&["a"]));
        let (again, second) = remove_properties(edited.clone(), &props(&["a"]));

        assert!(first[0].found);
        assert!(!second[0].found);
        assert_eq!(again, edited);
    }

    #[test]
    fn test_nested_keys_are_not_reached() {
        let (edited, removals) = remove_properties(doc("outer:\n  inner: 1"), &props(&["inner"]));

        assert!(!removals[0].found);
        assert_eq!(edited, doc("outer:\n  inner: 1"));
    }

    #[test]
    fn test_non_mapping_document() {
        let (edited, removals) = remove_properties(doc("[1, 2, 3]"), &props(&["a"]));

        assert!(!removals[0].found);
        assert_eq!(edited, doc("[1, 2, 3]"));
    }
}
