//! Pipeline orchestration.
//!
//! A run has two phases:
//!
//! 1. **Compile** (build tasks only): modules are compiled one after another.
//! 2. **Export**: bundles are located for every module, then one export task
//!    per module is spawned and all of them are awaited before the outcome
//!    is decided.
//!
//! There is no partial success: one failing module fails the run.

use std::path::PathBuf;

use futures::future::join_all;

use crate::classpath::Classpath;
use crate::compile::{CompilationMode, Compiler, JavaRunner, ProcessRunner};
use crate::config::{Config, RunConfig};
use crate::error::{Error, Result};
use crate::export::{
    ExportWrapper, Exporter, GwtApiExporter, PackageMetadata, PackageVariants, dist_path,
};
use crate::locate::{CACHE_MARKER, locate_artifact};
use crate::registry::{ModuleDescriptor, load_modules};

/// Loaded state for one run.
pub struct Pipeline<R, E> {
    run: RunConfig,
    modules: Vec<ModuleDescriptor>,
    compiler: Compiler<R>,
    wrapper: ExportWrapper<E>,
}

impl Pipeline<JavaRunner, GwtApiExporter> {
    /// Load configuration, registry and package metadata from the project
    /// root and wire up the JVM runner and the built-in exporter.
    pub fn load(run: RunConfig) -> Result<Self> {
        let config = Config::load(&run.dirs)?;
        let modules = load_modules(&run.dirs.modules_file(), run.module_filter.as_deref())?;
        let package = PackageMetadata::load(&run.dirs.package_file())?;

        let classpath = Classpath::build(&config);
        tracing::debug!("Classpath: {classpath}");

        let compiler = Compiler::new(
            JavaRunner::new(config.java.clone()),
            &classpath,
            run.dirs.clone(),
        )
        .with_timeout(config.compile_timeout);
        let wrapper = ExportWrapper::new(
            GwtApiExporter,
            PackageVariants::new(package),
            run.dirs.dist_dir.clone(),
        );

        Ok(Self::new(run, modules, compiler, wrapper))
    }
}

impl<R: ProcessRunner, E: Exporter> Pipeline<R, E> {
    pub fn new(
        run: RunConfig,
        modules: Vec<ModuleDescriptor>,
        compiler: Compiler<R>,
        wrapper: ExportWrapper<E>,
    ) -> Self {
        Self {
            run,
            modules,
            compiler,
            wrapper,
        }
    }

    /// Modules selected for this run.
    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    pub fn compiler(&self) -> &Compiler<R> {
        &self.compiler
    }

    pub fn wrapper(&self) -> &ExportWrapper<E> {
        &self.wrapper
    }

    /// Compile every selected module.
    pub async fn compile(&self, mode: CompilationMode) -> Result<()> {
        self.compiler
            .compile(&self.modules, mode, self.run.verbose)
            .await
    }

    /// Compile, then export. Nothing is exported if any compile fails.
    pub async fn build(&self, mode: CompilationMode) -> Result<Vec<PathBuf>> {
        self.compile(mode).await?;
        self.export().await
    }

    /// Export already compiled bundles.
    ///
    /// Every bundle is located before any export starts. All export tasks
    /// run to completion; if any failed, the first failure in module order
    /// is returned. On success the written files are returned in module
    /// order.
    pub async fn export(&self) -> Result<Vec<PathBuf>> {
        let requests = self
            .modules
            .iter()
            .map(|module| {
                let dir = self.run.dirs.module_war_dir(&module.war);
                let artifact = locate_artifact(&module.name, &dir, CACHE_MARKER)?;
                tracing::debug!("Module {}: bundle {}", module.name, artifact.display());
                Ok(self.wrapper.request(module, artifact))
            })
            .collect::<Result<Vec<_>>>()?;

        self.run.dirs.ensure_dist()?;

        let tasks = requests.into_iter().map(|request| {
            let wrapper = self.wrapper.clone();
            tokio::spawn(async move { wrapper.export_module(request).await })
        });
        let results = join_all(tasks).await;

        let mut first_error: Option<Error> = None;
        let mut outputs = Vec::with_capacity(results.len());
        for (module, result) in self.modules.iter().zip(results) {
            match result.map_err(Error::from).and_then(|r| r) {
                Ok(()) => outputs.push(dist_path(&self.run.dirs.dist_dir, &module.name)),
                Err(e) => {
                    tracing::error!("Export of module {} failed: {e}", module.name);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(outputs),
        }
    }
}
