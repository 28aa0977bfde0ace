//! Population variance and standard deviation of a numeric sample.

use crate::errors::{Error, Result};
use num_traits::Float;
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the variance is accumulated. Both are single-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispersionMethod {
    /// `E[X^2] - E[X]^2` from a running sum and sum of squares.
    /// Can cancel to a tiny negative value on near-constant samples.
    #[default]
    SecondMoment,
    /// Welford's running mean / M2 update. Never negative.
    Welford,
}

fn as_f64<F: Float>(x: F) -> f64 {
    num_traits::cast(x).unwrap_or(f64::NAN)
}

/// Rejects empty samples and NaN / infinite values.
fn check_sample<F: Float>(sample: &[F]) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    if let Some(index) = sample.iter().position(|x| !x.is_finite()) {
        return Err(Error::NonFiniteValue { index });
    }
    Ok(())
}

fn second_moment<F: Float>(sample: &[F]) -> F {
    let (mut n, mut sum, mut sum_sq) = (F::zero(), F::zero(), F::zero());
    for &x in sample {
        n = n + F::one();
        sum = sum + x;
        sum_sq = sum_sq + x * x;
    }
    let mean = sum / n;
    sum_sq / n - mean * mean
}

fn welford<F: Float>(sample: &[F]) -> F {
    let (mut n, mut mean, mut m2) = (F::zero(), F::zero(), F::zero());
    for &x in sample {
        n = n + F::one();
        let delta = x - mean;
        mean = mean + delta / n;
        m2 = m2 + delta * (x - mean);
    }
    m2 / n
}

/// Population variance of `sample`.
///
/// With [`DispersionMethod::SecondMoment`] the result is returned as computed,
/// even if cancellation made it slightly negative. A result that overflowed to
/// infinity or NaN is an [`Error::Overflow`].
pub fn variance<F: Float>(sample: &[F], method: DispersionMethod) -> Result<F> {
    check_sample(sample)?;
    let var = match method {
        DispersionMethod::SecondMoment => second_moment(sample),
        DispersionMethod::Welford => welford(sample),
    };
    if !var.is_finite() {
        return Err(Error::Overflow { variance: as_f64(var) });
    }
    if var < F::zero() {
        warn!(
            variance = as_f64(var),
            len = sample.len(),
            "variance cancelled below zero"
        );
    }
    Ok(var)
}

/// Square root of the population variance.
pub fn standard_deviation<F: Float>(sample: &[F], method: DispersionMethod) -> Result<F> {
    sqrt_checked(variance(sample, method)?)
}

fn sqrt_checked<F: Float>(var: F) -> Result<F> {
    if var < F::zero() {
        return Err(Error::NegativeVariance {
            variance: as_f64(var),
        });
    }
    Ok(var.sqrt())
}

/// Variance and standard deviation computed together.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dispersion<F> {
    pub variance: F,
    pub std_dev: F,
}

impl<F: Float> Dispersion<F> {
    pub fn compute(sample: &[F], method: DispersionMethod) -> Result<Self> {
        let variance = variance(sample, method)?;
        let std_dev = sqrt_checked(variance)?;
        Ok(Dispersion { variance, std_dev })
    }
}
