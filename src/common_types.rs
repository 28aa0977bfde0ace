//! This module contains the data structures shared by the learners: labels,
//! labeled examples and the attribute schema.

use crate::errors::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary class label attached to every training example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    Yes,
    No,
}

impl Label {
    /// Parses the literal `"yes"` / `"no"` used in the raw tables. Exact match only.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "yes" => Some(Label::Yes),
            "no" => Some(Label::No),
            _ => None,
        }
    }

    pub fn is_positive(self) -> bool {
        self == Label::Yes
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Yes => f.write_str("yes"),
            Label::No => f.write_str("no"),
        }
    }
}

/// Represents a single training example: categorical attribute values plus a label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrainingExample {
    pub attributes: Vec<String>,
    pub label: Label,
}

impl TrainingExample {
    pub fn new<S: Into<String>>(attributes: impl IntoIterator<Item = S>, label: Label) -> Self {
        TrainingExample {
            attributes: attributes.into_iter().map(Into::into).collect(),
            label,
        }
    }

    /// Builds an example from a raw table row whose last cell is the label.
    ///
    /// `index` is the row's position in its table and is only used in errors.
    pub fn from_row(index: usize, row: &[&str]) -> Result<Self> {
        let (raw_label, attributes) = match row.split_last() {
            Some((label, rest)) if !rest.is_empty() => (*label, rest),
            // A row needs at least one attribute cell in front of the label
            _ => {
                return Err(Error::MalformedExample {
                    index,
                    expected: 1,
                    got: row.len().saturating_sub(1),
                });
            }
        };
        let label = Label::parse(raw_label).ok_or_else(|| Error::InvalidLabel {
            index,
            label: raw_label.to_string(),
        })?;
        Ok(TrainingExample::new(attributes.iter().copied(), label))
    }

    pub fn arity(&self) -> usize {
        self.attributes.len()
    }
}

/// Names of the attribute positions, parallel to `TrainingExample::attributes`.
/// `target` names the label column and is only used for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNames {
    names: Vec<String>,
    target: Option<String>,
}

impl AttributeNames {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        AttributeNames {
            names: names.into_iter().map(Into::into).collect(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse_is_exact() {
        assert_eq!(Label::parse("yes"), Some(Label::Yes));
        assert_eq!(Label::parse("no"), Some(Label::No));
        assert_eq!(Label::parse("Yes"), None);
        assert_eq!(Label::parse(" no"), None);
        assert_eq!(Label::parse(""), None);
    }

    #[test]
    fn test_from_row_splits_label_off_the_end() {
        let example = TrainingExample::from_row(0, &["sunny", "warm", "normal", "strong", "yes"]).unwrap();
        assert_eq!(example.attributes, vec!["sunny", "warm", "normal", "strong"]);
        assert_eq!(example.label, Label::Yes);
        assert_eq!(example.arity(), 4);
    }

    #[test]
    fn test_from_row_rejects_bad_label() {
        let err = TrainingExample::from_row(3, &["sunny", "warm", "maybe"]).unwrap_err();
        assert_eq!(err, Error::InvalidLabel { index: 3, label: "maybe".to_string() });
    }

    #[test]
    fn test_from_row_rejects_label_only_rows() {
        assert!(matches!(
            TrainingExample::from_row(1, &["yes"]),
            Err(Error::MalformedExample { index: 1, got: 0, .. })
        ));
        assert!(matches!(
            TrainingExample::from_row(2, &[]),
            Err(Error::MalformedExample { index: 2, got: 0, .. })
        ));
    }

    #[test]
    fn test_attribute_names_accessors() {
        let names = AttributeNames::new(["weather", "temp"]).with_target("enjoy");
        assert_eq!(names.len(), 2);
        assert_eq!(names.get(1), Some("temp"));
        assert_eq!(names.get(2), None);
        assert_eq!(names.target(), Some("enjoy"));
        assert_eq!(names.iter().collect::<Vec<_>>(), vec!["weather", "temp"]);
    }
}
