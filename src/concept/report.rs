//! Console report for a learned hypothesis.

use super::hypothesis::Hypothesis;
use crate::common_types::AttributeNames;
use crate::errors::{Error, Result};
use std::fmt;

/// Which attribute lines the report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Print only slots holding a concrete value; `?` and `-` slots are skipped.
    PerSlot,
    /// Print every position, wildcards included. This mirrors the legacy
    /// script, whose filter compared the whole hypothesis against `"?"` and so
    /// never skipped anything.
    Verbatim,
}

/// Renders the heading, the raw hypothesis and one `<name> : <value>` line per kept slot.
#[derive(Debug, Clone, Copy)]
pub struct HypothesisReport<'a> {
    hypothesis: &'a Hypothesis,
    attribute_names: &'a AttributeNames,
    mode: ReportMode,
}

impl<'a> HypothesisReport<'a> {
    pub const HEADING: &'static str = "The sport is enjoyed when : ";
    pub const NON_SPECIFIC: &'static str = "The entire hypothesis is non-specific";

    /// Pairs a hypothesis with its schema. Both must have one entry per attribute.
    pub fn new(
        hypothesis: &'a Hypothesis,
        attribute_names: &'a AttributeNames,
        mode: ReportMode,
    ) -> Result<Self> {
        if hypothesis.len() != attribute_names.len() {
            return Err(Error::ArityMismatch {
                expected: attribute_names.len(),
                got: hypothesis.len(),
            });
        }
        Ok(HypothesisReport { hypothesis, attribute_names, mode })
    }

    /// `(name, value)` pairs that make it into the report.
    pub fn attribute_lines(&self) -> Vec<(&'a str, &'a str)> {
        let names: &'a AttributeNames = self.attribute_names;
        let hypothesis: &'a Hypothesis = self.hypothesis;
        names
            .iter()
            .zip(hypothesis.slots().iter())
            .filter(|(_, slot)| match self.mode {
                ReportMode::PerSlot => slot.is_specific(),
                ReportMode::Verbatim => true,
            })
            .map(|(name, slot)| (name, slot.as_str()))
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![Self::HEADING.to_string(), self.hypothesis.to_string()];
        let attribute_lines = self.attribute_lines();
        if attribute_lines.is_empty() {
            lines.push(Self::NON_SPECIFIC.to_string());
        } else {
            lines.extend(attribute_lines.into_iter().map(|(name, value)| format!("{name} : {value}")));
        }
        lines
    }
}

impl fmt::Display for HypothesisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::hypothesis::Slot;
    use crate::datasets;

    fn learned() -> Hypothesis {
        Hypothesis::from_slots(vec![
            Slot::Value("sunny".to_string()),
            Slot::DontCare,
            Slot::DontCare,
            Slot::DontCare,
        ])
    }

    #[test]
    fn test_per_slot_skips_wildcards() {
        let names = datasets::enjoy_sport_attributes();
        let hypothesis = learned();
        let report = HypothesisReport::new(&hypothesis, &names, ReportMode::PerSlot).unwrap();
        assert_eq!(
            report.lines(),
            vec![
                "The sport is enjoyed when : ".to_string(),
                "['sunny', '?', '?', '?']".to_string(),
                "weather : sunny".to_string(),
            ]
        );
    }

    #[test]
    fn test_verbatim_prints_every_position() {
        let names = datasets::enjoy_sport_attributes();
        let hypothesis = learned();
        let report = HypothesisReport::new(&hypothesis, &names, ReportMode::Verbatim).unwrap();
        assert_eq!(
            report.to_string(),
            "The sport is enjoyed when : \n\
             ['sunny', '?', '?', '?']\n\
             weather : sunny\n\
             temp : ?\n\
             humidity : ?\n\
             wind speed : ?\n"
        );
    }

    #[test]
    fn test_fallback_message_when_nothing_specific() {
        let names = datasets::enjoy_sport_attributes();
        let general = Hypothesis::from_slots(vec![Slot::DontCare; 4]);
        let report = HypothesisReport::new(&general, &names, ReportMode::PerSlot).unwrap();
        assert_eq!(report.lines().last().map(String::as_str), Some(HypothesisReport::NON_SPECIFIC));

        let unassigned = Hypothesis::most_specific(4);
        let report = HypothesisReport::new(&unassigned, &names, ReportMode::PerSlot).unwrap();
        assert_eq!(report.attribute_lines(), Vec::<(&str, &str)>::new());
        assert_eq!(report.lines().len(), 3);
    }

    #[test]
    fn test_verbatim_fallback_unreachable_with_attributes() {
        let names = datasets::enjoy_sport_attributes();
        let unassigned = Hypothesis::most_specific(4);
        let report = HypothesisReport::new(&unassigned, &names, ReportMode::Verbatim).unwrap();
        assert_eq!(report.attribute_lines().len(), 4);
        assert!(!report.lines().iter().any(|l| l == HypothesisReport::NON_SPECIFIC));
        assert_eq!(report.lines()[2], "weather : -");
    }

    #[test]
    fn test_schema_and_hypothesis_must_line_up() {
        let names = datasets::enjoy_sport_attributes();
        let short = Hypothesis::from_slots(vec![Slot::DontCare; 2]);
        assert_eq!(
            HypothesisReport::new(&short, &names, ReportMode::Verbatim).err(),
            Some(Error::ArityMismatch { expected: 4, got: 2 })
        );
    }
}
