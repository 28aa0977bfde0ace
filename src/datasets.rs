//! Literal data the demo binaries run on.

use crate::common_types::{AttributeNames, TrainingExample};
use crate::errors::Result;

/// Enjoy-sport table: weather, temperature, humidity, wind speed, then the label.
pub const ENJOY_SPORT_ROWS: &[[&str; 5]] = &[
    ["sunny", "warm", "normal", "strong", "yes"],
    ["sunny", "cool", "high", "low", "no"],
    ["rainy", "warm", "normal", "strong", "no"],
    ["sunny", "cool", "low", "strong", "yes"],
    ["sunny", "warm", "low", "low", "yes"],
];

pub const ENJOY_SPORT_ATTRIBUTES: [&str; 4] = ["weather", "temp", "humidity", "wind speed"];
pub const ENJOY_SPORT_TARGET: &str = "enjoy";

pub const SAMPLE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

pub fn enjoy_sport_attributes() -> AttributeNames {
    AttributeNames::new(ENJOY_SPORT_ATTRIBUTES).with_target(ENJOY_SPORT_TARGET)
}

/// Parses `ENJOY_SPORT_ROWS`, labels included, into typed examples.
pub fn enjoy_sport_examples() -> Result<Vec<TrainingExample>> {
    ENJOY_SPORT_ROWS
        .iter()
        .enumerate()
        .map(|(index, row)| TrainingExample::from_row(index, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_rectangular_with_binary_labels() {
        for (index, row) in ENJOY_SPORT_ROWS.iter().enumerate() {
            let example = TrainingExample::from_row(index, row).unwrap();
            assert_eq!(example.arity(), ENJOY_SPORT_ATTRIBUTES.len());
        }
        let examples = enjoy_sport_examples().unwrap();
        assert_eq!(examples.len(), ENJOY_SPORT_ROWS.len());
        let positives = examples.iter().filter(|e| e.label.is_positive()).count();
        assert_eq!(positives, 3);
    }
}
