//! Per-module export requests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::exporter::{ExportRequest, Exporter};
use super::metadata::PackageVariants;
use crate::error::Result;
use crate::registry::ModuleDescriptor;

/// File name prefix of exported bundles.
pub const DIST_PREFIX: &str = "openchemlib";

/// Extension of exported bundles.
pub const DIST_EXTENSION: &str = "js";

/// Public symbol every module is exported under.
pub const EXPORT_SYMBOL: &str = "OCL";

/// `dist/<prefix>-<module>.<ext>`
pub fn dist_path(dist_dir: &Path, module: &str) -> PathBuf {
    dist_dir.join(format!("{DIST_PREFIX}-{module}.{DIST_EXTENSION}"))
}

/// Builds export requests and hands them to an [`Exporter`].
pub struct ExportWrapper<E> {
    exporter: Arc<E>,
    packages: PackageVariants,
    dist_dir: PathBuf,
}

// Manual impl: `E` itself need not be `Clone`.
impl<E> Clone for ExportWrapper<E> {
    fn clone(&self) -> Self {
        Self {
            exporter: Arc::clone(&self.exporter),
            packages: self.packages.clone(),
            dist_dir: self.dist_dir.clone(),
        }
    }
}

impl<E: Exporter> ExportWrapper<E> {
    pub fn new(exporter: E, packages: PackageVariants, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            exporter: Arc::new(exporter),
            packages,
            dist_dir: dist_dir.into(),
        }
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Describe the export of `module` from its located bundle.
    pub fn request(&self, module: &ModuleDescriptor, artifact: PathBuf) -> ExportRequest {
        ExportRequest {
            module: module.name.clone(),
            input: artifact,
            output: dist_path(&self.dist_dir, &module.name),
            exports: EXPORT_SYMBOL.to_string(),
            fake: module.fake,
            package: self.packages.for_module(&module.name).clone(),
        }
    }

    /// Export one module. Exporter errors are returned unchanged.
    pub async fn export_module(&self, request: ExportRequest) -> Result<()> {
        tracing::info!("Exporting module {}", request.module);
        self.exporter.export(request).await
    }
}
