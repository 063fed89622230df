//! Sequential compilation of selected modules.

use std::time::Duration;

use tokio::fs;

use super::runner::ProcessRunner;
use super::types::{CompilationMode, CompilerInvocation, ProcessOutput};
use crate::classpath::Classpath;
use crate::error::{Error, Result};
use crate::paths::ProjectDirs;
use crate::registry::ModuleDescriptor;

/// Drives the external compiler, one module at a time.
///
/// The compiler is a heavyweight JVM process; running a single instance
/// bounds memory use and keeps its output from interleaving.
pub struct Compiler<R> {
    runner: R,
    classpath: String,
    dirs: ProjectDirs,
    timeout: Option<Duration>,
}

impl<R: ProcessRunner> Compiler<R> {
    pub fn new(runner: R, classpath: &Classpath, dirs: ProjectDirs) -> Self {
        Self {
            runner,
            classpath: classpath.join(),
            dirs,
            timeout: None,
        }
    }

    /// Abort a module's compilation after `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The invocation that would be issued for a module.
    pub fn invocation(
        &self,
        module: &ModuleDescriptor,
        mode: CompilationMode,
        verbose: bool,
    ) -> CompilerInvocation {
        CompilerInvocation::new(
            &module.name,
            &self.classpath,
            &module.entrypoint,
            mode,
            verbose,
            &self.dirs.root,
        )
    }

    /// Compile every module in order, stopping at the first failure.
    pub async fn compile(
        &self,
        modules: &[ModuleDescriptor],
        mode: CompilationMode,
        verbose: bool,
    ) -> Result<()> {
        for module in modules {
            self.compile_module(module, mode, verbose).await?;
        }
        Ok(())
    }

    /// Compile a single module.
    ///
    /// In verbose mode the captured output is written to
    /// `compile-<module>.log` whether or not the compiler succeeded.
    pub async fn compile_module(
        &self,
        module: &ModuleDescriptor,
        mode: CompilationMode,
        verbose: bool,
    ) -> Result<ProcessOutput> {
        tracing::info!("Compiling module {} ({mode})", module.name);

        let invocation = self.invocation(module, mode, verbose);
        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.runner.run(&invocation))
                .await
                .map_err(|_| Error::CompilationTimeout {
                    module: module.name.clone(),
                    timeout,
                })??,
            None => self.runner.run(&invocation).await?,
        };

        tracing::debug!(
            "Compiler for {} exited with {:?} ({} bytes stdout, {} bytes stderr)",
            module.name,
            output.code,
            output.stdout.len(),
            output.stderr.len()
        );

        if verbose {
            let log_path = self.dirs.compile_log(&module.name);
            fs::write(&log_path, output.combined()).await?;
            tracing::info!("Compilation log written to {}", log_path.display());
        }

        if !output.success {
            return Err(Error::CompilationFailed {
                module: module.name.clone(),
                output: output.combined_text(),
            });
        }

        Ok(output)
    }
}
