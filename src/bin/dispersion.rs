//! Prints the population variance, then the standard deviation, of the embedded sample.

use anyhow::Context;
use concept_learning::{Dispersion, DispersionMethod, datasets};

fn main() -> anyhow::Result<()> {
    concept_learning::init_tracing();

    let dispersion = Dispersion::compute(&datasets::SAMPLE, DispersionMethod::SecondMoment)
        .context("computing dispersion of the embedded sample")?;
    println!("{:?}", dispersion.variance);
    println!("{:?}", dispersion.std_dev);
    Ok(())
}
