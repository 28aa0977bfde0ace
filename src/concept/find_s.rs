//! Find-S: the most specific conjunctive hypothesis consistent with all
//! positive examples.

use super::hypothesis::Hypothesis;
use super::report::{HypothesisReport, ReportMode};
use crate::common_types::{AttributeNames, TrainingExample};
use crate::errors::{Error, Result};
use tracing::{debug, trace};

/// Learns over the examples, taking the arity from the first example.
///
/// Every example must have the same number of attributes as the first one.
pub fn learn(examples: &[TrainingExample]) -> Result<Hypothesis> {
    let first = examples.first().ok_or(Error::EmptyTrainingSet)?;
    run(examples, first.arity())
}

/// Single forward pass in sequence order. Negative examples are skipped
/// without being looked at beyond their arity.
fn run(examples: &[TrainingExample], arity: usize) -> Result<Hypothesis> {
    if examples.is_empty() {
        return Err(Error::EmptyTrainingSet);
    }
    // Shape is checked up front so a bad row fails before any slot is touched
    for (index, example) in examples.iter().enumerate() {
        if example.arity() != arity {
            return Err(Error::MalformedExample {
                index,
                expected: arity,
                got: example.arity(),
            });
        }
    }

    let mut hypothesis = Hypothesis::most_specific(arity);
    for (index, example) in examples.iter().enumerate() {
        if !example.label.is_positive() {
            trace!(index, "skipping negative example");
            continue;
        }
        let relaxed = hypothesis.generalize_to(&example.attributes);
        debug!(index, relaxed, hypothesis = %hypothesis, "processed positive example");
    }
    Ok(hypothesis)
}

/// Find-S learner bound to an attribute schema.
#[derive(Debug, Clone)]
pub struct FindS {
    attribute_names: AttributeNames,
    report_mode: ReportMode,
}

impl FindS {
    const DEFAULT_REPORT_MODE: ReportMode = ReportMode::PerSlot;

    pub fn new(attribute_names: AttributeNames, report_mode: Option<ReportMode>) -> Self {
        FindS {
            attribute_names,
            report_mode: report_mode.unwrap_or(Self::DEFAULT_REPORT_MODE),
        }
    }

    pub fn attribute_names(&self) -> &AttributeNames {
        &self.attribute_names
    }

    pub fn report_mode(&self) -> ReportMode {
        self.report_mode
    }

    /// Learns a hypothesis. Every example must carry one value per configured attribute name.
    pub fn learn(&self, examples: &[TrainingExample]) -> Result<Hypothesis> {
        run(examples, self.attribute_names.len())
    }

    /// Parses raw rows (last cell is the label) and learns from them.
    pub fn learn_rows<'r, R: AsRef<[&'r str]>>(&self, rows: &[R]) -> Result<Hypothesis> {
        let examples = rows
            .iter()
            .enumerate()
            .map(|(index, row)| TrainingExample::from_row(index, row.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.learn(&examples)
    }

    /// Builds the textual report for a learned hypothesis.
    /// Fails when the hypothesis does not have one slot per configured attribute.
    pub fn report<'a>(&'a self, hypothesis: &'a Hypothesis) -> Result<HypothesisReport<'a>> {
        HypothesisReport::new(hypothesis, &self.attribute_names, self.report_mode)
    }
}
