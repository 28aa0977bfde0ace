//! Conjunctive hypotheses over categorical attributes.

use crate::errors::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One position of a hypothesis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slot {
    /// No positive example has been seen yet. Covers nothing.
    Unassigned,
    /// Constrained to exactly this attribute value.
    Value(String),
    /// Positive examples disagreed here; any value is accepted.
    DontCare,
}

impl Slot {
    pub const UNASSIGNED_MARKER: &'static str = "-";
    pub const DONT_CARE_MARKER: &'static str = "?";

    /// Text form used in reports: the value itself or one of the two markers.
    pub fn as_str(&self) -> &str {
        match self {
            Slot::Unassigned => Self::UNASSIGNED_MARKER,
            Slot::Value(v) => v.as_str(),
            Slot::DontCare => Self::DONT_CARE_MARKER,
        }
    }

    pub fn is_specific(&self) -> bool {
        matches!(self, Slot::Value(_))
    }

    pub fn covers(&self, value: &str) -> bool {
        match self {
            Slot::Unassigned => false,
            Slot::Value(v) => v == value,
            Slot::DontCare => true,
        }
    }

    /// Minimal generalization of this slot so it also covers `value`.
    pub(crate) fn generalize(&mut self, value: &str) {
        let next = match self {
            Slot::Unassigned => Slot::Value(value.to_string()),
            Slot::Value(v) if v.as_str() != value => Slot::DontCare,
            Slot::Value(_) | Slot::DontCare => return,
        };
        *self = next;
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of slots, one per attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hypothesis {
    slots: Vec<Slot>,
}

impl Hypothesis {
    /// The most specific hypothesis: every slot unassigned.
    pub fn most_specific(arity: usize) -> Self {
        Hypothesis { slots: vec![Slot::Unassigned; arity] }
    }

    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Hypothesis { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when no positive example has constrained any slot.
    pub fn is_unassigned(&self) -> bool {
        self.slots.iter().all(|s| *s == Slot::Unassigned)
    }

    /// True when every slot is `DontCare`, i.e. the hypothesis accepts everything.
    pub fn is_fully_general(&self) -> bool {
        self.slots.iter().all(|s| *s == Slot::DontCare)
    }

    /// Conjunctive coverage test against a vector of attribute values.
    pub fn matches<S: AsRef<str>>(&self, values: &[S]) -> Result<bool> {
        if values.len() != self.slots.len() {
            return Err(Error::ArityMismatch {
                expected: self.slots.len(),
                got: values.len(),
            });
        }
        Ok(self
            .slots
            .iter()
            .zip(values.iter())
            .all(|(slot, value)| slot.covers(value.as_ref())))
    }

    /// Relaxes each slot just enough to cover `values`. Lengths are checked by the caller.
    pub(crate) fn generalize_to(&mut self, values: &[String]) -> usize {
        let mut relaxed = 0;
        for (slot, value) in self.slots.iter_mut().zip(values.iter()) {
            let before = slot.clone();
            slot.generalize(value);
            if *slot != before {
                relaxed += 1;
            }
        }
        relaxed
    }
}

/// Renders as a quoted list: `['sunny', '?', '?', '?']`.
impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", slot)?;
        }
        f.write_str("]")
    }
}
