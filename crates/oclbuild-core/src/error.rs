//! Error types for oclbuild-core.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type for oclbuild-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or exporting modules.
///
/// Every variant is terminal for a run: nothing is retried and nothing is
/// swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// `config.json` is absent from the project root.
    #[error(
        "config.json not found at {}. You can copy config.default.json to start from an example.",
        path.display()
    )]
    ConfigurationMissing { path: PathBuf },

    /// A configuration file exists but its content is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The module filter matched nothing in the registry.
    #[error("module {0} not found")]
    ModuleNotFound(String),

    /// The module registry could not be read.
    #[error("module registry error: {0}")]
    Registry(String),

    /// The JVM launcher could not be resolved or started.
    #[error("toolchain error: {0}")]
    Toolchain(String),

    /// The external compiler exited with a non-zero status.
    #[error("compilation failed for module {module}: {output}")]
    CompilationFailed { module: String, output: String },

    /// The external compiler did not finish within the configured timeout.
    #[error("compilation of module {module} timed out after {}s", timeout.as_secs())]
    CompilationTimeout { module: String, timeout: Duration },

    /// No generated bundle was found in the module's output directory.
    #[error("could not find compiled bundle for module {module} in {}", dir.display())]
    ArtifactNotFound { module: String, dir: PathBuf },

    /// The exporter rejected a module.
    #[error("export failed for module {module}: {reason}")]
    ExportFailed { module: String, reason: String },

    /// Package metadata could not be loaded.
    #[error("package metadata error: {0}")]
    Metadata(String),

    /// Copying classes from an external source tree failed.
    #[error("sync error: {0}")]
    Sync(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A spawned export task panicked or was cancelled.
    #[error("export task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl Error {
    /// Render the error with a recovery hint for terminal display.
    pub fn with_hint(&self) -> String {
        match self.hint() {
            Some(hint) => format!("{self}\n  hint: {hint}"),
            None => self.to_string(),
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigurationMissing { .. } => {
                Some("create config.json with at least a \"gwt\" entry pointing at the GWT SDK")
            }
            Self::ModuleNotFound(_) => Some("check the module names listed in modules.json"),
            Self::Toolchain(_) => Some("install a JDK or set \"java\" in config.json"),
            Self::CompilationFailed { .. } => {
                Some("re-run with --verbose to write the full compiler log to compile-<module>.log")
            }
            Self::ArtifactNotFound { .. } => {
                Some("run a build first; `export` only wraps already compiled bundles")
            }
            _ => None,
        }
    }
}
