//! Build and compile commands.

use std::time::Instant;

use oclbuild_core::{CompilationMode, Pipeline, RunConfig};

use crate::colors;

/// Result type for CLI operations.
pub type CliResult = anyhow::Result<()>;

/// Compile the selected modules, then export them when `export` is set.
pub async fn execute(run: RunConfig, mode: CompilationMode, export: bool) -> CliResult {
    let start = Instant::now();
    let pipeline = Pipeline::load(run)?;

    let task = if export { "build" } else { "compile" };
    colors::header(task, &mode.to_string());

    pipeline.compile(mode).await?;
    colors::done(
        "Compiled",
        format!("{} module(s)", pipeline.modules().len()),
    );

    if export {
        let outputs = pipeline.export().await?;
        for output in &outputs {
            colors::done("Exported", output.display());
        }
    }

    colors::elapsed(start);
    Ok(())
}
