//! Sync command: copy upstream classes into `src/`.

use std::time::Instant;

use oclbuild_core::{Config, RunConfig, SourceTree, sync_tree};

use crate::build::CliResult;
use crate::colors;

pub fn execute(run: RunConfig, trees: &[SourceTree]) -> CliResult {
    let start = Instant::now();
    let config = Config::load(&run.dirs)?;

    for &tree in trees {
        colors::header("sync", tree.name());
        let report = sync_tree(tree, &config, &run.dirs)?;
        colors::done("Copied", format!("{} classes", report.copied));
        colors::done("Overridden", format!("{} classes", report.modified));
    }

    colors::elapsed(start);
    Ok(())
}
