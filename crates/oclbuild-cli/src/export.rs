//! Export command: wrap already compiled bundles.

use std::time::Instant;

use oclbuild_core::{Pipeline, RunConfig};

use crate::build::CliResult;
use crate::colors;

pub async fn execute(run: RunConfig) -> CliResult {
    let start = Instant::now();
    let pipeline = Pipeline::load(run)?;

    colors::header("export", &format!("{} module(s)", pipeline.modules().len()));

    for output in pipeline.export().await? {
        colors::done("Exported", output.display());
    }

    colors::elapsed(start);
    Ok(())
}
