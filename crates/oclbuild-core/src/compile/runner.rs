//! Process runners for the external compiler.
//!
//! [`ProcessRunner`] is the seam between the pipeline and the JVM: the
//! pipeline only ever hands over a [`CompilerInvocation`], and tests swap in
//! a runner that never spawns anything.

use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use super::types::{CompilerInvocation, ProcessOutput};
use crate::error::{Error, Result};

/// Runs a compiler invocation to completion and captures its output.
///
/// A non-zero exit is reported through [`ProcessOutput::success`], not as an
/// error; errors are reserved for failing to run the process at all.
pub trait ProcessRunner: Send + Sync {
    fn run(
        &self,
        invocation: &CompilerInvocation,
    ) -> impl Future<Output = Result<ProcessOutput>> + Send;
}

/// Runs the compiler with a local JVM.
///
/// The launcher is resolved on first use, so tasks that never compile do
/// not require a JDK.
#[derive(Debug, Clone, Default)]
pub struct JavaRunner {
    java: Option<PathBuf>,
}

impl JavaRunner {
    /// Use the given launcher, or find `java` in PATH when `None`.
    pub fn new(java: Option<PathBuf>) -> Self {
        Self { java }
    }

    /// Path of the JVM launcher.
    pub fn launcher(&self) -> Result<PathBuf> {
        match &self.java {
            Some(path) => Ok(path.clone()),
            None => which::which("java")
                .map_err(|_| Error::Toolchain("java not found in PATH".to_string())),
        }
    }
}

impl ProcessRunner for JavaRunner {
    async fn run(&self, invocation: &CompilerInvocation) -> Result<ProcessOutput> {
        let java = self.launcher()?;
        tracing::debug!("{} {}", java.display(), invocation.args().join(" "));

        let output = Command::new(&java)
            .args(invocation.args())
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                Error::Toolchain(format!(
                    "failed to run {} (working dir: {}): {e}",
                    java.display(),
                    invocation.working_dir.display()
                ))
            })?;

        Ok(ProcessOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
