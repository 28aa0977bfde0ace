//! Learns the enjoy-sport hypothesis from the embedded table and prints the report.

use anyhow::Context;
use concept_learning::{FindS, datasets};

fn main() -> anyhow::Result<()> {
    concept_learning::init_tracing();

    let learner = FindS::new(datasets::enjoy_sport_attributes(), None);
    let hypothesis = learner
        .learn_rows(datasets::ENJOY_SPORT_ROWS)
        .context("learning from the enjoy-sport table")?;
    let report = learner.report(&hypothesis).context("rendering the hypothesis report")?;
    print!("{}", report);
    Ok(())
}
