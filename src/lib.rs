// Declare the learner and statistics modules
pub mod common_types;
pub mod concept;
pub mod datasets;
pub mod errors;
pub mod stats;

pub use common_types::{AttributeNames, Label, TrainingExample};
pub use concept::{FindS, Hypothesis, HypothesisReport, ReportMode, Slot};
pub use errors::{Error, Result};
pub use stats::{Dispersion, DispersionMethod};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber used by the demo binaries.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .try_init();
}

#[cfg(feature = "python")]
mod python {
    use super::{AttributeNames, DispersionMethod, Error, FindS, TrainingExample, stats};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    impl From<Error> for PyErr {
        fn from(err: Error) -> Self {
            PyValueError::new_err(err.to_string())
        }
    }

    fn method(stable: bool) -> DispersionMethod {
        if stable { DispersionMethod::Welford } else { DispersionMethod::SecondMoment }
    }

    /// Runs Find-S over rows whose last cell is "yes"/"no" and returns the slots as strings.
    #[pyfunction]
    fn find_s(rows: Vec<Vec<String>>, attribute_names: Vec<String>) -> PyResult<Vec<String>> {
        let examples = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let cells: Vec<&str> = row.iter().map(String::as_str).collect();
                TrainingExample::from_row(index, &cells)
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let learner = FindS::new(AttributeNames::new(attribute_names), None);
        let hypothesis = learner.learn(&examples)?;
        Ok(hypothesis.slots().iter().map(|s| s.as_str().to_string()).collect())
    }

    /// Population variance. `stable=True` switches to Welford's update.
    #[pyfunction]
    #[pyo3(signature = (sample, stable = false))]
    fn variance(sample: Vec<f64>, stable: bool) -> PyResult<f64> {
        Ok(stats::variance(&sample, method(stable))?)
    }

    #[pyfunction]
    #[pyo3(signature = (sample, stable = false))]
    fn standard_deviation(sample: Vec<f64>, stable: bool) -> PyResult<f64> {
        Ok(stats::standard_deviation(&sample, method(stable))?)
    }

    /// The name of this function must match the `lib.name` in `Cargo.toml`.
    #[pymodule]
    fn concept_learning(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(find_s, m)?)?;
        m.add_function(wrap_pyfunction!(variance, m)?)?;
        m.add_function(wrap_pyfunction!(standard_deviation, m)?)?;
        Ok(())
    }
}
