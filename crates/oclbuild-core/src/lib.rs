//! Build pipeline for the OpenChemLib JavaScript bundles.
//!
//! This crate provides:
//! - Module registry loading and filtering
//! - Classpath assembly for the GWT compiler
//! - Sequential compiler invocation through an injectable process runner
//! - Compiled bundle discovery
//! - Concurrent export wrapping with per-module package metadata
//! - Upstream source tree synchronisation
//!
//! # Architecture
//!
//! ```text
//! modules.json ──► ModuleRegistry ──► Compiler (one JVM at a time) ──► war/<module>/
//!                                                                         │
//!                              dist/openchemlib-<module>.js ◄── Exporter ◄┘ (one task per module)
//! ```

pub mod classpath;
pub mod compile;
pub mod config;
pub mod error;
pub mod export;
pub mod locate;
pub mod paths;
pub mod pipeline;
pub mod registry;
pub mod sync;

pub use classpath::{Classpath, build_classpath};
pub use compile::{CompilationMode, Compiler, CompilerInvocation, JavaRunner, ProcessRunner};
pub use config::{Config, ExtraClasspath, RunConfig};
pub use error::{Error, Result};
pub use export::{ExportRequest, ExportWrapper, Exporter, GwtApiExporter, PackageMetadata};
pub use locate::{CACHE_MARKER, locate_artifact};
pub use paths::ProjectDirs;
pub use pipeline::Pipeline;
pub use registry::{ModuleDescriptor, ModuleRegistry, load_modules};
pub use sync::{SourceTree, SyncReport, sync_tree};
