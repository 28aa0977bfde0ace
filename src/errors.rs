//! Error type shared by the hypothesis learner and the dispersion calculator.

use thiserror::Error;

/// Everything that can go wrong in this crate. All variants are precondition
/// failures; nothing here is retried or recovered from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `learn` was handed no examples at all.
    #[error("training set is empty; at least one example is required")]
    EmptyTrainingSet,

    /// An example has the wrong number of attribute values.
    #[error("malformed example at index {index}: expected {expected} attribute values, got {got}")]
    MalformedExample {
        index: usize,
        expected: usize,
        got: usize,
    },

    /// A hypothesis and the values (or schema) it was paired with disagree on length.
    #[error("arity mismatch: expected {expected} positions, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// A raw row carried a label other than `yes` / `no`.
    #[error("invalid label {label:?} at index {index}: expected \"yes\" or \"no\"")]
    InvalidLabel { index: usize, label: String },

    /// Variance is undefined for a sample of length 0.
    #[error("numeric sample is empty; variance needs at least one value")]
    EmptySample,

    /// NaN or an infinity in the numeric sample.
    #[error("numeric sample holds a non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    /// The accumulation overflowed, leaving an infinite or NaN variance.
    #[error("variance {variance} is not finite; the sample's squares overflow the float type")]
    Overflow { variance: f64 },

    /// Floating-point cancellation pushed the variance below zero, so its square root is undefined.
    #[error("variance {variance} is negative; standard deviation is undefined")]
    NegativeVariance { variance: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
