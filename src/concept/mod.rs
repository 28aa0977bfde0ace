//! Concept learning over categorical attributes.

pub mod find_s;
pub mod hypothesis;
pub mod report;

pub use find_s::{FindS, learn};
pub use hypothesis::{Hypothesis, Slot};
pub use report::{HypothesisReport, ReportMode};
